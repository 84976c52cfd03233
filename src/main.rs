mod cli;
mod config;
mod history;
mod repl;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, EvalArgs, HexArgs, SplitArgs};
use config::Config;
use engine::calculator::WarikanDisplay;
use engine::{
    evaluate, evaluate_hex, format_number, report_calc_error, CalcError, Mode, Rounding,
    SplitRequest,
};
use history::{save_or_warn, HistoryStore, JsonHistoryStore, MemoryHistoryStore};
use lexer::normalize::normalize;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(code);
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Exit code of the finished command; `Err` is reserved for I/O plumbing.
fn run(cli: &Cli) -> Result<i32> {
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let history_path = cli
        .history
        .clone()
        .unwrap_or_else(|| config.history.resolved_path());
    debug!(?config, history = %history_path.display(), "configuration loaded");
    let mut store = JsonHistoryStore::new(history_path);

    match &cli.command {
        Some(Commands::Eval(args)) => Ok(run_eval(&config, &mut store, args)),
        Some(Commands::Hex(args)) => Ok(run_hex(args)),
        Some(Commands::Split(args)) => Ok(run_split(&config, args)),
        Some(Commands::History(args)) => run_history(&config, &store, args.limit),
        Some(Commands::Repl(args)) if args.no_save => {
            repl::run(&config, &mut MemoryHistoryStore::new())
        }
        Some(Commands::Repl(_)) => repl::run(&config, &mut store),
        None => run_history(&config, &store, None),
    }
}

fn run_eval(config: &Config, store: &mut dyn HistoryStore, args: &EvalArgs) -> i32 {
    let mode = Mode::new(args.angle_unit(config.calculator.angle_unit), args.inv);
    match evaluate(&args.expr, mode, args.ans.unwrap_or(0.0)) {
        Ok(value) => {
            let shown = format_number(value);
            println!("{}", shown);
            if !args.no_save {
                save_or_warn(store, &args.expr, &shown);
            }
            0
        }
        // Syntax spans point into the normalized text
        Err(err) => report_failure(&normalize(&args.expr), &err),
    }
}

fn run_hex(args: &HexArgs) -> i32 {
    match evaluate_hex(&args.expr) {
        Ok(value) => {
            println!("{}", value.hex());
            println!("DEC: {}", value.decimal());
            0
        }
        Err(err) => report_failure(&args.expr, &err),
    }
}

fn run_split(config: &Config, args: &SplitArgs) -> i32 {
    let rounding = if args.round_up {
        Rounding::RoundUpTo100
    } else {
        config.warikan.rounding
    };
    let request =
        SplitRequest::new(args.total, args.people, rounding).with_groups(args.groups.clone());

    match request.compute() {
        Ok(result) => {
            let display = WarikanDisplay::from_result(&result);
            println!("per person: {}", display.per_person);
            for group in &display.groups {
                println!("{}", group);
            }
            println!("remainder: {}", display.remainder);
            0
        }
        Err(err) => report_failure("", &err),
    }
}

fn run_history(config: &Config, store: &dyn HistoryStore, limit: Option<usize>) -> Result<i32> {
    let limit = limit.unwrap_or(config.history.recent_limit);
    let records = store
        .list_recent(limit)
        .context("failed to read calculation history")?;

    if records.is_empty() {
        println!("No calculations saved yet.");
    }
    for record in &records {
        println!("{}", record.display());
    }
    Ok(0)
}

fn report_failure(source: &str, err: &CalcError) -> i32 {
    if report_calc_error("<input>", source, err).is_err() {
        eprintln!("Error: {}", err);
    }
    err.exit_code()
}

//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand};
use engine::{AngleUnit, WeightGroup};
use std::path::PathBuf;

/// calcdeck: scientific, hexadecimal and bill-split calculator
#[derive(Parser, Debug)]
#[command(name = "calcdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: <config dir>/calcdeck/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// History file, overriding the configured one
    #[arg(long, value_name = "PATH", global = true)]
    pub history: Option<PathBuf>,

    /// Subcommand to run; lists recent history when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a scientific expression
    Eval(EvalArgs),

    /// Evaluate a hexadecimal expression
    Hex(HexArgs),

    /// Split a bill between people
    Split(SplitArgs),

    /// Show saved calculations, most recent first
    History(HistoryArgs),

    /// Interactive scientific session
    Repl(ReplArgs),
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression, e.g. "sin(30)*2" or "2^10"
    #[arg(allow_hyphen_values = true)]
    pub expr: String,

    /// Trig functions take and return radians
    #[arg(long, conflicts_with = "deg")]
    pub rad: bool,

    /// Trig functions take and return degrees
    #[arg(long)]
    pub deg: bool,

    /// Use inverse bindings (asin, 10^x, e^x, x^2, y-th root)
    #[arg(long)]
    pub inv: bool,

    /// Value bound to `Ans`
    #[arg(long, allow_negative_numbers = true)]
    pub ans: Option<f64>,

    /// Do not record the calculation in history
    #[arg(long)]
    pub no_save: bool,
}

impl EvalArgs {
    /// Flags win over the configured unit
    pub fn angle_unit(&self, configured: AngleUnit) -> AngleUnit {
        if self.rad {
            AngleUnit::Radians
        } else if self.deg {
            AngleUnit::Degrees
        } else {
            configured
        }
    }
}

#[derive(Args, Debug)]
pub struct HexArgs {
    /// Expression over hex literals, e.g. "A + 5"
    #[arg(allow_hyphen_values = true)]
    pub expr: String,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Amount to split
    #[arg(long)]
    pub total: f64,

    /// Number of people, including weighted groups
    #[arg(long)]
    pub people: u32,

    /// Round each share up to the next 100
    #[arg(long)]
    pub round_up: bool,

    /// Weighted group, e.g. 2:0.5 for two people paying half (repeatable)
    #[arg(long = "group", value_name = "COUNT:RATIO", value_parser = parse_group)]
    pub groups: Vec<WeightGroup>,
}

#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Keep this session's history in memory only
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of records to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

fn parse_group(s: &str) -> Result<WeightGroup, String> {
    let (count, ratio) = s
        .split_once(':')
        .ok_or_else(|| format!("expected COUNT:RATIO, found '{}'", s))?;
    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid group count '{}': {}", count, e))?;
    let ratio = ratio
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid group ratio '{}': {}", ratio, e))?;
    Ok(WeightGroup::new(count, ratio))
}

//! Line-oriented scientific session.
//!
//! One expression per line; `Ans` and the mode flags carry over between
//! lines. Lines starting with `:` are commands.

use crate::config::Config;
use crate::history::{save_or_warn, HistoryStore};
use anyhow::{Context, Result};
use engine::builtins::math::symbol_names;
use engine::format::format_number;
use engine::{AngleUnit, Mode, ScientificCalculator};
use std::io::{self, BufRead, Write};

/// What the session wants done after a line
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Print(String),
    Nothing,
    Quit,
}

pub struct Session {
    calc: ScientificCalculator,
    recent_limit: usize,
}

impl Session {
    pub fn new(angle_unit: AngleUnit, recent_limit: usize) -> Self {
        Self {
            calc: ScientificCalculator::new(Mode::new(angle_unit, false)),
            recent_limit,
        }
    }

    pub fn mode(&self) -> Mode {
        self.calc.mode()
    }

    /// `DEG> ` or `RAD INV> `
    pub fn prompt(&self) -> String {
        let mode = self.mode();
        if mode.inverse {
            format!("{} INV> ", mode.angle_unit.label())
        } else {
            format!("{}> ", mode.angle_unit.label())
        }
    }

    pub fn handle(&mut self, line: &str, store: &mut dyn HistoryStore) -> Step {
        let line = line.trim();
        match line.strip_prefix(':') {
            Some(command) => self.command(command.trim(), store),
            None => self.evaluate(line, store),
        }
    }

    /// Blank lines leave the previous expression and result in place.
    fn evaluate(&mut self, line: &str, store: &mut dyn HistoryStore) -> Step {
        if line.is_empty() {
            return Step::Nothing;
        }
        self.calc.clear();
        self.calc.append(line);
        match self.calc.calculate() {
            None => Step::Nothing,
            Some(Ok(value)) => {
                save_or_warn(store, line, &format_number(value));
                Step::Print(self.calc.result_text().to_string())
            }
            Some(Err(err)) => Step::Print(format!("{}: {}", self.calc.result_text(), err)),
        }
    }

    fn command(&mut self, command: &str, store: &dyn HistoryStore) -> Step {
        match command {
            "deg" => self.set_angle_unit(AngleUnit::Degrees),
            "rad" => self.set_angle_unit(AngleUnit::Radians),
            "inv" => {
                self.calc.toggle_inverse();
                let state = if self.mode().inverse { "on" } else { "off" };
                self.with_refreshed_result(format!("inverse {}", state))
            }
            "clear" => {
                self.calc.clear();
                Step::Print(self.calc.result_text().to_string())
            }
            "history" => self.history(store),
            "help" => Step::Print(help_text()),
            "quit" | "q" => Step::Quit,
            other => Step::Print(format!("unknown command ':{}' (try :help)", other)),
        }
    }

    fn set_angle_unit(&mut self, unit: AngleUnit) -> Step {
        if self.mode().angle_unit != unit {
            self.calc.toggle_angle_unit();
        }
        self.with_refreshed_result(unit.label().to_string())
    }

    /// Toggles re-evaluate the last expression; show its new value too
    fn with_refreshed_result(&self, status: String) -> Step {
        if self.calc.input().trim().is_empty() {
            Step::Print(status)
        } else {
            Step::Print(format!("{}\n{}", status, self.calc.result_text()))
        }
    }

    fn history(&self, store: &dyn HistoryStore) -> Step {
        match store.list_recent(self.recent_limit) {
            Ok(records) if records.is_empty() => Step::Print("No calculations saved yet.".to_string()),
            Ok(records) => Step::Print(
                records
                    .iter()
                    .map(|r| r.display())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Err(err) => Step::Print(format!("Error: {}", err)),
        }
    }
}

fn help_text() -> String {
    let symbols: Vec<&str> = symbol_names().collect();
    format!(
        "operators: + - * / ^ ( )\nsymbols: {}\ncommands: :deg :rad :inv :clear :history :help :quit",
        symbols.join(" ")
    )
}

/// Run the session on stdin/stdout until `:quit` or end of input.
pub fn run(config: &Config, store: &mut dyn HistoryStore) -> Result<i32> {
    let mut session = Session::new(config.calculator.angle_unit, config.history.recent_limit);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}", session.prompt())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        match session.handle(&line, store) {
            Step::Print(text) => writeln!(stdout, "{}", text)?,
            Step::Nothing => {}
            Step::Quit => break,
        }
        write!(stdout, "{}", session.prompt())?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(0)
}

//! Line-oriented interactive session.
//!
//! Each input line edits the calculator or prints a report. The estimate is
//! recomputed after every edit and the new net proceeds figure is echoed.

use std::io::{BufRead, Write};

use anyhow::Result;
use proceeds_core::{ClosingCostsMode, CostField};
use thiserror::Error;
use tracing::{debug, info};

use crate::report::{render_audit, render_fields, render_summary};
use crate::state::CalculatorState;
use crate::themes::Palette;
use crate::utils::{coerce_input, format_currency};

const HELP: &str = "\
Commands:
  <field> <value>        set a field, e.g. `sale_price $525,000`
  set <field> <value>    same as above
  mode <percent|currency>
  show                   print the estimate
  audit                  print the full net recovery sheet
  fields                 list fields and current values
  reset                  return to the starting values
  help                   this text
  quit                   leave the session";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown field '{0}' (try `fields`)")]
    UnknownField(String),

    #[error("unknown closing costs mode '{0}' (use percent or currency)")]
    UnknownMode(String),

    #[error("missing value for {0}")]
    MissingValue(String),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: CostField, raw: String },
    Mode(ClosingCostsMode),
    Show,
    Audit,
    Fields,
    Reset,
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "show" => Ok(Self::Show),
            "audit" => Ok(Self::Audit),
            "fields" => Ok(Self::Fields),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "mode" => ClosingCostsMode::parse(rest)
                .map(Self::Mode)
                .ok_or_else(|| CommandError::UnknownMode(rest.to_string())),
            "set" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                Self::set(name, value)
            }
            _ => Self::set(head, rest),
        }
    }

    fn set(
        name: &str,
        value: &str,
    ) -> Result<Self, CommandError> {
        if name.is_empty() {
            return Err(CommandError::MissingValue("set".to_string()));
        }
        let field = CostField::parse(name).ok_or_else(|| CommandError::UnknownField(name.to_string()))?;
        if value.is_empty() {
            return Err(CommandError::MissingValue(field.name().to_string()));
        }
        Ok(Self::Set {
            field,
            raw: value.to_string(),
        })
    }
}

/// Runs commands from `input` until it ends or `quit` is read.
///
/// Bad commands are reported on `output` and the session carries on.
pub fn run<R: BufRead, W: Write>(
    state: &mut CalculatorState,
    input: R,
    mut output: W,
    palette: &Palette,
) -> Result<()> {
    info!("interactive session started");
    writeln!(output, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        debug!(?command, "session command");

        match command {
            Command::Empty => {}
            Command::Set { field, raw } => {
                let value = coerce_input(&raw);
                let net = state.set_field(field, value).net_proceeds;
                writeln!(
                    output,
                    "{} = {} -> net proceeds {}",
                    field,
                    value.normalize(),
                    format_currency(net, 0)
                )?;
            }
            Command::Mode(mode) => {
                let net = state.set_mode(mode).net_proceeds;
                writeln!(
                    output,
                    "closing costs mode = {mode} -> net proceeds {}",
                    format_currency(net, 0)
                )?;
            }
            Command::Show => write!(output, "{}", render_summary(state, palette))?,
            Command::Audit => write!(output, "{}", render_audit(&state.audit(), palette))?,
            Command::Fields => write!(output, "{}", render_fields(state))?,
            Command::Reset => {
                let net = state.reset().net_proceeds;
                writeln!(output, "reset -> net proceeds {}", format_currency(net, 0))?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
        }
    }

    output.flush()?;
    info!("interactive session ended");
    Ok(())
}

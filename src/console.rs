//! Line-oriented console commands driving the dashboard.
//!
//! Each stdin line is parsed with clap in multicall mode, so the first word
//! is the command name and `help` lists them.

use clap::{Parser, Subcommand, ValueEnum};

use crate::dashboard::Dashboard;

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

pub const GREETING: &str = "type `help` for commands";

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Reload the order list now
    #[command(alias = "r")]
    Refresh,
    /// Turn background polling on or off
    Auto {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Select an order by id or by 1-based row number
    #[command(alias = "s")]
    Select { target: String },
    /// Open or close the assistant panel
    #[command(alias = "c")]
    Chat,
    /// Ask the assistant about the selected order (opens the panel)
    Say {
        // One entry after parsing: the raw message text.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Leave the dashboard
    #[command(aliases = ["q", "exit"])]
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Unknown command, bad arguments, or an explicit `help` request.
    #[error("{0}")]
    Parse(#[from] clap::Error),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Parse`] carrying clap's rendered message.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }
        let mut command = Line::try_parse_from(words)?.command;
        // clap only validates; the message keeps the user's own spacing.
        if let Self::Say { words } = &mut command {
            *words = vec![rest_of_line(line).to_owned()];
        }
        Ok(Some(command))
    }
}

/// Everything after the command word, trimmed at both ends.
fn rest_of_line(line: &str) -> &str {
    line.trim()
        .split_once(char::is_whitespace)
        .map_or("", |(_, rest)| rest.trim())
}

/// What the driver loop should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Keep running and print this note under the screen.
    Notice(String),
    Quit,
}

/// Apply a command to the dashboard.
pub fn apply(dash: &mut Dashboard, cmd: Command) -> Flow {
    match cmd {
        Command::Refresh => {
            if dash.refresh() {
                Flow::Continue
            } else {
                Flow::Notice("refresh already in progress".into())
            }
        }
        Command::Auto { state } => {
            dash.set_auto_refresh(state == Toggle::On);
            Flow::Continue
        }
        Command::Select { target } => match target.parse::<usize>() {
            Ok(row) => {
                if row > 0 && dash.select_row(row - 1) {
                    Flow::Continue
                } else {
                    Flow::Notice(format!("no row {row}"))
                }
            }
            Err(_) => {
                dash.select_order(target);
                Flow::Continue
            }
        },
        Command::Chat => {
            dash.toggle_chat();
            Flow::Continue
        }
        Command::Say { words } => {
            if !dash.chat().open {
                dash.toggle_chat();
            }
            dash.set_chat_input(words.join(" "));
            if dash.submit_chat() {
                Flow::Continue
            } else if dash.orders().selected_id().is_none() {
                Flow::Notice("select an order before asking the assistant".into())
            } else {
                Flow::Notice("waiting for the previous reply".into())
            }
        }
        Command::Quit => Flow::Quit,
    }
}

//! Console Commands
//!
//! Line-oriented commands read from stdin by the binary. The console is the
//! stand-in for the page's search box and sidebar.

use std::str::FromStr;

/// Usage text printed for `help`.
pub const HELP: &str = "\
commands:
  search <symbol>   search for a stock symbol
  nav <section>     select a sidebar section
  show              print the board
  snapshot          print the board as JSON
  metrics           print Prometheus metrics
  help              print this text
  quit              exit";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Submit the search box with this raw input.
    Search(String),
    /// Select the section with this label.
    Nav(String),
    /// Print the rendered board.
    Show,
    /// Print the board as JSON.
    Snapshot,
    /// Print the metrics exposition.
    Metrics,
    /// Print usage.
    Help,
    /// Exit.
    Quit,
}

/// Console parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Blank line.
    #[error("empty command")]
    Empty,
    /// Command word not recognized.
    #[error("unknown command: {0}")]
    Unknown(String),
    /// Command requires an argument.
    #[error("{0} requires an argument")]
    MissingArgument(&'static str),
}

impl ConsoleCommand {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns an error for blank lines, unknown words, or missing arguments.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "search" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument("search"))
                } else {
                    Ok(Self::Search(rest.to_string()))
                }
            }
            "nav" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument("nav"))
                } else {
                    Ok(Self::Nav(rest.to_string()))
                }
            }
            "show" => Ok(Self::Show),
            "snapshot" => Ok(Self::Snapshot),
            "metrics" => Ok(Self::Metrics),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

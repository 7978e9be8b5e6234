//! The line-oriented commands understood by the `special-avl` demo.
//!
//! # Examples
//!
//! ```
//! use midpoint_bst::command::{Command, CommandError};
//!
//! assert_eq!("insert 42".parse(), Ok(Command::Insert(42)));
//! assert_eq!("s -7".parse(), Ok(Command::Search(-7)));
//! assert_eq!("print".parse(), Ok(Command::Print));
//!
//! assert_eq!(
//!     "jump 3".parse::<Command>(),
//!     Err(CommandError::UnknownCommand("jump".to_string()))
//! );
//! ```

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// One request to the demo tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `insert <key>` or `i <key>`.
    Insert(i32),
    /// `remove <key>`, `delete <key>` or `d <key>`.
    Remove(i32),
    /// `search <key>` or `s <key>`.
    Search(i32),
    /// `print`: show the keys in order.
    Print,
    /// `quit` or `exit`.
    Quit,
}

/// Why a line couldn't be read as a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line was blank.
    #[error("empty command")]
    Empty,
    /// The first word isn't a command.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    /// The command needs a key but none was given.
    #[error("`{0}` needs a key")]
    MissingKey(String),
    /// The key isn't an integer.
    #[error("invalid key `{key}`")]
    InvalidKey {
        /// The text that was given as the key.
        key: String,
        /// Why it didn't parse.
        #[source]
        source: ParseIntError,
    },
    /// There was more on the line than the command takes.
    #[error("unexpected `{0}` after command")]
    TrailingInput(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "insert" | "i" => Command::Insert(key(name, words.next())?),
            "remove" | "delete" | "d" => Command::Remove(key(name, words.next())?),
            "search" | "s" => Command::Search(key(name, words.next())?),
            "print" | "p" => Command::Print,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::UnknownCommand(name.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn key(command: &str, word: Option<&str>) -> Result<i32, CommandError> {
    let word = word.ok_or_else(|| CommandError::MissingKey(command.to_string()))?;
    word.parse().map_err(|source| CommandError::InvalidKey {
        key: word.to_string(),
        source,
    })
}

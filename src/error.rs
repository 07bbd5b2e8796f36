//! Module containing the Error enum for errors that can occur in this crate.


use std::error::Error as StdError;
use std::fmt::Display;
use std::io;


/// Error enum for errors that can occur in this crate.
///
/// Bracket errors carry the 0-based position of the offending command in
/// the loaded program. They are detected before execution starts and are
/// fatal; the program is rejected outright.
#[derive(Debug)]
pub enum Error {
    /// Unmatched open bracket.
    UnmatchedOpenBracket(usize),
    /// Unmatched close bracket.
    UnmatchedCloseBracket(usize),
    /// The byte channel failed while reading input or writing output.
    Io(io::Error),
}
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::UnmatchedOpenBracket(position) => write!(f, "Unmatched '[' at position {}.", position),
            Error::UnmatchedCloseBracket(position) => write!(f, "Unmatched ']' at position {}.", position),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

//! Parse errors.

use crate::base::Position;
use thiserror::Error;

/// Errors that stop a module from parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unexpected '{found}' at {position}, expected {expected}")]
    Unexpected {
        expected: String,
        found: String,
        position: Position,
    },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Invalid character '{text}' at {position}")]
    InvalidCharacter { text: String, position: Position },

    #[error("Invalid number '{text}' at {position}")]
    InvalidNumber { text: String, position: Position },
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VhdlError {
    #[error("{0}")]
    Any(String),
    #[error("invalid character {0}")]
    Invalid(String),
    #[error("missing and empty {0}")]
    MissingAndEmpty(char),
    #[error("expecting closing {0} but got {1}")]
    MissingClosingAndGot(char, char),
    #[error("line {line}, column {column}: expecting {} while parsing {}", list(.expected), list(.considered))]
    ParseFailure {
        line: usize,
        column: usize,
        expected: Vec<String>,
        considered: Vec<String>,
    },
    #[error("line {line}, column {column}: {alternatives} derivations remain after disambiguation")]
    AmbiguityUnresolved {
        line: usize,
        column: usize,
        alternatives: usize,
    },
    #[error("exceeded the time limit for parsing a single file")]
    TimedOut,
    #[error("invalid syntax")]
    Vague,
}

/// Joins a set of token or rule names for display in a diagnostic.
fn list(items: &Vec<String>) -> String {
    match items.is_empty() {
        true => String::from("???"),
        false => items.join(", "),
    }
}

impl VhdlError {
    /// Checks if the error is recoverable by moving on to the next source file.
    pub fn is_parse_failure(&self) -> bool {
        match self {
            Self::ParseFailure { .. } => true,
            _ => false,
        }
    }
}

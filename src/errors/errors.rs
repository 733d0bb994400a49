use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A short excerpt of the tokens leading up to an error, with the column the
/// caret should point at.
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    pub line: String,
    pub caret: usize,
}

impl Display for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  {}\n  {:>width$}", self.line, "^", width = self.caret + 1)
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    snippet: Option<Snippet>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            snippet: None,
        }
    }

    pub fn with_snippet(mut self, snippet: Snippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_snippet(&self) -> Option<&Snippet> {
        self.snippet.as_ref()
    }

    /// True for plain stream exhaustion, which the driver treats as the
    /// normal end of a program when it happens between statements.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::EndOfStream)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EndOfStream => "EndOfStream",
            ErrorImpl::OutOfBounds => "OutOfBounds",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::MalformedLiteral { .. } => "MalformedLiteral",
            ErrorImpl::UnterminatedBlock { .. } => "UnterminatedBlock",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EndOfStream | ErrorImpl::OutOfBounds => ErrorTip::None,
            ErrorImpl::SyntaxError { found, expected } if found.is_empty() => {
                ErrorTip::Suggestion(format!(
                    "Empty token where {} was expected, are there two spaces in a row?",
                    expected_list(expected)
                ))
            }
            ErrorImpl::SyntaxError { found, expected } => ErrorTip::Suggestion(format!(
                "Found `{}`, expected {}",
                found,
                expected_list(expected)
            )),
            ErrorImpl::MalformedLiteral { message, .. } => {
                ErrorTip::Suggestion(message.clone())
            }
            ErrorImpl::UnterminatedBlock { opener, expected } => ErrorTip::Suggestion(format!(
                "The `{}` block ran out of input, is a closing `{}` missing?",
                opener, expected
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Blocks and expressions may be nested at most {} levels deep",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at position {}: {}",
            self.get_error_name(),
            self.position.offset,
            self.internal_error
        )?;

        if let Some(snippet) = &self.snippet {
            write!(f, "\n\n{}\n", snippet)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

fn expected_list(expected: &[&str]) -> String {
    expected
        .iter()
        .map(|token| format!("`{}`", token))
        .collect::<Vec<_>>()
        .join(" or ")
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected end of token stream")]
    EndOfStream,
    #[error("read past the end of the token stream")]
    OutOfBounds,
    #[error("invalid symbol {found:?}, expected {}", expected_list(.expected))]
    SyntaxError {
        found: String,
        expected: Vec<&'static str>,
    },
    #[error("malformed {literal} literal: {message}")]
    MalformedLiteral {
        literal: &'static str,
        message: String,
    },
    #[error("{opener:?} block is missing {expected:?}")]
    UnterminatedBlock {
        opener: &'static str,
        expected: &'static str,
    },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

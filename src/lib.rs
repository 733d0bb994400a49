#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::ast::Program;
pub use parser::parser::{parse, parse_with_config, ParseConfig};

/// Location of a token: its index in the token sequence and its byte offset
/// in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub token: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(token: usize, offset: usize) -> Self {
        Position { token, offset }
    }
}

/// Returns the 1-based line number and the line's text for a byte offset.
pub fn get_line_at_position(content: &str, offset: usize) -> (usize, &str) {
    let mut start = 0;

    for (number, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if offset < end {
            return (number + 1, line.trim_end_matches(['\n', '\r']));
        }

        start = end;
    }

    let last_line = content.split('\n').count().max(1);
    (last_line, content.rsplit('\n').next().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "x = 1\nfun f ( )\n  ret x\nend";

        let (line_number, line) = super::get_line_at_position(content, 2);
        assert_eq!(line_number, 1);
        assert_eq!(line, "x = 1");

        let (line_number, line) = super::get_line_at_position(content, 18);
        assert_eq!(line_number, 3);
        assert_eq!(line, "  ret x");

        let (line_number, line) = super::get_line_at_position(content, content.len());
        assert_eq!(line_number, 4);
        assert_eq!(line, "end");
    }
}

pub fn display_error(error: &Error, file: &Path, content: &str) {
    /*
        Error: SyntaxError (Found `5`, expected `=`)
        -> program.dude:1
          x 5
            ^
    */

    let (line, _) = get_line_at_position(content, error.get_position().offset);

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}:{}", file.as_os_str().to_string_lossy(), line);

    if let Some(snippet) = error.get_snippet() {
        eprintln!("{}", snippet);
    }
}

//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Snippet};
use crate::Position;

fn syntax_error(found: &str, expected: Vec<&'static str>) -> Error {
    Error::new(
        ErrorImpl::SyntaxError {
            found: found.to_string(),
            expected,
        },
        Position::new(1, 2),
    )
}

#[test]
fn test_error_creation() {
    let error = syntax_error("5", vec!["="]);

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert!(!error.is_end_of_stream());
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::EndOfStream, Position::new(7, 42));

    assert_eq!(error.get_position().token, 7);
    assert_eq!(error.get_position().offset, 42);
}

#[test]
fn test_end_of_stream_error() {
    let error = Error::new(ErrorImpl::EndOfStream, Position::default());

    assert_eq!(error.get_error_name(), "EndOfStream");
    assert!(error.is_end_of_stream());
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::OutOfBounds, "OutOfBounds"),
        (
            ErrorImpl::MalformedLiteral {
                literal: "string",
                message: "missing closing `\"`".to_string(),
            },
            "MalformedLiteral",
        ),
        (
            ErrorImpl::UnterminatedBlock {
                opener: "fun",
                expected: "end",
            },
            "UnterminatedBlock",
        ),
        (
            ErrorImpl::NumberParseError {
                token: "0xFFFFFFFFFFFFFFFFFF".to_string(),
            },
            "NumberParseError",
        ),
        (ErrorImpl::NestingTooDeep { limit: 3 }, "NestingTooDeep"),
    ];

    for (error_impl, name) in cases {
        let error = Error::new(error_impl, Position::default());
        assert_eq!(error.get_error_name(), name);
        assert!(!error.is_end_of_stream());
    }
}

#[test]
fn test_syntax_error_message() {
    let error = syntax_error("5", vec!["="]);

    assert_eq!(
        error.get_impl().to_string(),
        "invalid symbol \"5\", expected `=`"
    );
    assert_eq!(error.to_string(), "SyntaxError at position 2: invalid symbol \"5\", expected `=`");
}

#[test]
fn test_syntax_error_lists_alternatives() {
    let error = syntax_error("]", vec![",", ":"]);

    assert_eq!(
        error.get_impl().to_string(),
        "invalid symbol \"]\", expected `,` or `:`"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = syntax_error("5", vec!["="]);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Found `5`, expected `=`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_for_empty_token() {
    let error = syntax_error("", vec!["="]);

    assert!(error.get_tip().to_string().contains("two spaces"));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_snippet_display() {
    let snippet = Snippet {
        line: "x 5".to_string(),
        caret: 2,
    };

    assert_eq!(snippet.to_string(), "  x 5\n    ^");
}

#[test]
fn test_error_display_with_snippet() {
    let error = syntax_error("5", vec!["="]).with_snippet(Snippet {
        line: "x 5".to_string(),
        caret: 2,
    });

    assert_eq!(
        error.to_string(),
        "SyntaxError at position 2: invalid symbol \"5\", expected `=`\n\n  x 5\n    ^\n"
    );
}

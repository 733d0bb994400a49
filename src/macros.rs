//! Utility macros for the parser.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `TRACE!` - Logs entry into a grammar production when tracing is enabled
//!
//! These macros reduce boilerplate in the lexer and grammar procedures.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$text` - The token's slice of the source
/// * `$offset` - Byte offset of the slice in the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(&word[start..end], word_offset + start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($text:expr, $offset:expr) => {
        Token {
            text: $text,
            offset: $offset,
        }
    };
}

/// Logs entry into a grammar production at `debug` level, but only when the
/// parser's context has tracing switched on.
///
/// # Arguments
///
/// * `$parser` - The `Parser` being driven
/// * `$production` - Name of the production being entered
///
/// # Example
///
/// ```ignore
/// TRACE!(parser, "function statement");
/// ```
#[macro_export]
macro_rules! TRACE {
    ($parser:expr, $production:expr) => {
        if $parser.context().tracing() {
            log::debug!(
                "{:>indent$}{} @ {} `{}`",
                "",
                $production,
                $parser.cursor().position(),
                $parser.cursor().current_text(),
                indent = $parser.context().depth() * 2
            );
        }
    };
}

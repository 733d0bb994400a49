//! Stateless predicates classifying a single token string.

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{TokenKind, DELIMITERS, KEYWORDS, OPERATORS, QUOTES, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[A-Za-z_][A-Za-z_0-9]*$").unwrap();
    static ref BIN_NUMBER: Regex = Regex::new("^0b[01][01']*$").unwrap();
    static ref DEC_NUMBER: Regex = Regex::new("^[0-9][0-9']*$").unwrap();
    static ref HEX_NUMBER: Regex = Regex::new("^0x[0-9A-Fa-f][0-9A-Fa-f']*$").unwrap();
    static ref FLOAT_NUMBER: Regex =
        Regex::new("^[0-9]+(\\.[0-9]+([Ee][+-]?[0-9]+)?)?$").unwrap();
}

pub fn is_identifier(token: &str) -> bool {
    IDENTIFIER.is_match(token)
}

pub fn is_number(token: &str) -> bool {
    BIN_NUMBER.is_match(token)
        || DEC_NUMBER.is_match(token)
        || HEX_NUMBER.is_match(token)
        || FLOAT_NUMBER.is_match(token)
}

pub fn is_keyword(token: &str) -> bool {
    KEYWORDS.contains(token)
}

pub fn is_operator(token: &str) -> bool {
    OPERATORS.contains(token)
}

pub fn is_delimiter(token: &str) -> bool {
    DELIMITERS.contains(token)
}

pub fn is_quote(token: &str) -> bool {
    QUOTES.contains(token)
}

/// A number or identifier that is not a reserved word.
pub fn is_value(token: &str) -> bool {
    (is_number(token) || is_identifier(token)) && !is_keyword(token)
}

pub fn classify(token: &str) -> TokenKind {
    if let Some(kind) = RESERVED_LOOKUP.get(token) {
        *kind
    } else if is_number(token) {
        TokenKind::Number
    } else if is_identifier(token) {
        TokenKind::Identifier
    } else {
        TokenKind::Unknown
    }
}

/// Evaluates a token accepted by [`is_number`]. Returns `None` when the
/// literal does not fit the target type.
pub fn number_value(token: &str) -> Option<f64> {
    let digits = token.replace('\'', "");

    if let Some(binary) = digits.strip_prefix("0b") {
        u64::from_str_radix(binary, 2).ok().map(|value| value as f64)
    } else if let Some(hex) = digits.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok().map(|value| value as f64)
    } else {
        digits.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

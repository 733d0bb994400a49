use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

// Keywords
pub const END: &str = "end";
pub const FUN: &str = "fun";
pub const IF: &str = "if";
pub const ELIF: &str = "elif";
pub const ELSE: &str = "else";
pub const NOP: &str = "nop";
pub const RET: &str = "ret";
pub const FOR: &str = "for";
pub const IN: &str = "in";
pub const WHILE: &str = "while";
pub const DAT: &str = "dat";
pub const TRUE: &str = "true";
pub const FALSE: &str = "false";
pub const NULL: &str = "null";

// Delimiters
pub const COLON: &str = ":";
pub const COMMA: &str = ",";
pub const OPEN_PAREN: &str = "(";
pub const CLOSE_PAREN: &str = ")";
pub const OPEN_BRACKET: &str = "[";
pub const CLOSE_BRACKET: &str = "]";

// Quote markers
pub const DOUBLE_QUOTE: &str = "\"";
pub const SINGLE_QUOTE: &str = "'";

pub const ASSIGN: &str = "=";

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = [
        END, FUN, IF, ELIF, ELSE, NOP, RET, FOR, IN, WHILE, DAT, TRUE, FALSE, NULL,
    ]
    .into_iter()
    .collect();

    /// Keywords that start an expression rather than end one.
    pub static ref LITERAL_KEYWORDS: HashSet<&'static str> =
        [TRUE, FALSE, NULL].into_iter().collect();

    pub static ref OPERATORS: HashSet<&'static str> =
        ["=", "+", "-", "*", "/", "<", ">", "!", "&", "|", "^", "~"]
            .into_iter()
            .collect();

    pub static ref DELIMITERS: HashSet<&'static str> =
        [COLON, COMMA, OPEN_PAREN, CLOSE_PAREN, OPEN_BRACKET, CLOSE_BRACKET]
            .into_iter()
            .collect();

    pub static ref QUOTES: HashSet<&'static str> =
        [DOUBLE_QUOTE, SINGLE_QUOTE].into_iter().collect();

    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for keyword in KEYWORDS.iter() {
            map.insert(*keyword, TokenKind::Keyword);
        }
        for operator in OPERATORS.iter() {
            map.insert(*operator, TokenKind::Operator);
        }
        for delimiter in DELIMITERS.iter() {
            map.insert(*delimiter, TokenKind::Delimiter);
        }
        for quote in QUOTES.iter() {
            map.insert(*quote, TokenKind::Quote);
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Operator,
    Delimiter,
    Quote,
    Number,
    Identifier,
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A slice of the source text and the byte offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub text: &'src str,
    pub offset: usize,
}

impl Token<'_> {
    /// Byte offset one past the last byte of the token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is(&self, symbol: &str) -> bool {
        self.text == symbol
    }

    pub fn is_one_of(&self, symbols: &[&str]) -> bool {
        symbols.iter().any(|symbol| *symbol == self.text)
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

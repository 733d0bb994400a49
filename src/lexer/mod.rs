//! Lexical analysis module for the parser.
//!
//! This module turns source text into tokens and classifies them. It handles:
//!
//! - Splitting source text on spaces and cutting out glued delimiters
//! - The closed symbol tables (keywords, operators, delimiters, quotes)
//! - Regex-backed predicates for identifiers and numeric literals
//! - Token byte offsets for error reporting

pub mod lexer;
pub mod patterns;
pub mod tokens;

//! Error types and error handling for the parser.
//!
//! This module defines the errors produced while tokenizing and parsing.
//! It includes:
//!
//! - An error structure carrying the token position and a context snippet
//! - The error taxonomy (stream exhaustion, syntax errors, malformed literals)
//! - Error formatting and suggestions

pub mod errors;

#[cfg(test)]
mod tests;

//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that walks the token
//! stream and builds a Program. It handles:
//!
//! - The token cursor shared by every grammar procedure
//! - Statement parsing (assignment, functions, conditionals, loops, structures)
//! - Expression parsing (literals, nested expressions, lists, sequences,
//!   single binary conditions)
//! - Depth limiting and error reporting
//!
//! Statements and expression operands are dispatched through lookup tables
//! keyed by their lead token.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::{
        DAT, DOUBLE_QUOTE, FALSE, FOR, FUN, IF, NOP, NULL, OPEN_BRACKET, OPEN_PAREN, RET,
        SINGLE_QUOTE, TRUE, WHILE,
    },
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;

// Keyed by the lead token of the production
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
pub type NUDLookup = HashMap<&'static str, NUDHandler>;

lazy_static! {
    pub static ref STMT_LOOKUP: StmtLookup = create_stmt_lookup();
    pub static ref NUD_LOOKUP: NUDLookup = create_nud_lookup();
}

fn create_stmt_lookup() -> StmtLookup {
    let mut lookup: StmtLookup = HashMap::new();

    lookup.insert(NOP, parse_empty_stmt);
    lookup.insert(RET, parse_return_stmt);
    lookup.insert(FUN, parse_function_stmt);
    lookup.insert(IF, parse_conditional_stmt);
    lookup.insert(WHILE, parse_while_loop_stmt);
    lookup.insert(FOR, parse_for_loop_stmt);
    lookup.insert(DAT, parse_structure_stmt);

    lookup
}

fn create_nud_lookup() -> NUDLookup {
    let mut lookup: NUDLookup = HashMap::new();

    // Literals
    lookup.insert(TRUE, parse_boolean_expr);
    lookup.insert(FALSE, parse_boolean_expr);
    lookup.insert(NULL, parse_null_expr);
    lookup.insert(DOUBLE_QUOTE, parse_string_expr);
    lookup.insert(SINGLE_QUOTE, parse_character_expr);

    // Composites
    lookup.insert(OPEN_PAREN, parse_nested_expr);
    lookup.insert(OPEN_BRACKET, parse_bracket_expr);

    lookup
}

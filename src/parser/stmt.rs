use crate::{
    ast::{
        expressions::Identifier,
        statements::{
            AssignmentStmt, ConditionalStmt, ForLoopStmt, FunctionStmt, ReturnStmt, Stmt,
            StructureStmt, WhileLoopStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        patterns::{is_identifier, is_keyword},
        tokens::{
            Token, ASSIGN, CLOSE_PAREN, COMMA, DAT, ELIF, ELSE, END, FOR, FUN, IF, IN,
            LITERAL_KEYWORDS, OPEN_PAREN, WHILE,
        },
    },
    TRACE,
};

use super::{expr::parse_expr, lookups::STMT_LOOKUP, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(|parser| {
        let token = parser.current()?;

        if let Some(handler) = STMT_LOOKUP.get(token.text) {
            return handler(parser);
        }

        if is_identifier(token.text) && !is_keyword(token.text) {
            return parse_assignment_stmt(parser);
        }

        Err(parser.syntax_error(vec!["statement"]))
    })
}

/// Turns stream exhaustion inside a block into an error naming the block.
fn unterminated(parser: &Parser, error: Error, opener: &'static str) -> Error {
    if error.is_end_of_stream() {
        parser.cursor().error(ErrorImpl::UnterminatedBlock {
            opener,
            expected: END,
        })
    } else {
        error
    }
}

/// Parses statements until one of `terminators` is reached. Returns the body
/// and the terminator, which the cursor is left on.
fn parse_block<'src>(
    parser: &mut Parser<'src>,
    opener: &'static str,
    terminators: &[&str],
) -> Result<(Vec<Stmt>, Token<'src>), Error> {
    let mut body = vec![];

    loop {
        let token = parser
            .advance()
            .map_err(|error| unterminated(parser, error, opener))?;

        if token.is_one_of(terminators) {
            return Ok((body, token));
        }

        body.push(parse_stmt(parser)?);
    }
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    TRACE!(parser, "empty statement");

    Ok(Stmt::Empty)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    TRACE!(parser, "return statement");

    // Keywords other than literals cannot start an expression
    let bare = match parser.cursor().peek(1) {
        Ok(next) => is_keyword(next.text) && !LITERAL_KEYWORDS.contains(next.text),
        Err(error) if error.is_end_of_stream() => true,
        Err(error) => return Err(error),
    };

    if bare {
        return Ok(Stmt::Return(ReturnStmt { value: None }));
    }

    parser.advance()?;
    let value = parse_expr(parser)?;

    Ok(Stmt::Return(ReturnStmt { value: Some(value) }))
}

pub fn parse_function_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    TRACE!(parser, "function statement");

    let token = parser.advance()?;

    let name = if token.is(OPEN_PAREN) {
        Identifier::empty()
    } else {
        let name = parser
            .expect_identifier()
            .map_err(|_| parser.syntax_error(vec!["identifier", OPEN_PAREN]))?;
        parser.expect_next(OPEN_PAREN)?;
        name
    };

    let mut parameters = vec![];
    let mut token = parser.advance()?;

    if !token.is(CLOSE_PAREN) {
        loop {
            parameters.push(parser.expect_identifier()?);

            token = parser.advance()?;
            if token.is(CLOSE_PAREN) {
                break;
            }
            if !token.is(COMMA) {
                return Err(parser.syntax_error(vec![COMMA, CLOSE_PAREN]));
            }

            parser.advance()?;
        }
    }

    let (body, _) = parse_block(parser, FUN, &[END])?;

    Ok(Stmt::Function(FunctionStmt {
        name,
        parameters,
        body,
    }))
}

pub fn parse_conditional_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    TRACE!(parser, "conditional statement");

    parser.advance()?;
    let if_condition = parse_expr(parser)?;
    let (if_body, mut terminator) = parse_block(parser, IF, &[ELIF, ELSE, END])?;

    let mut elif_condition = None;
    let mut elif_body = vec![];
    if terminator.is(ELIF) {
        parser.advance()?;
        elif_condition = Some(parse_expr(parser)?);
        (elif_body, terminator) = parse_block(parser, IF, &[ELSE, END])?;
    }

    let mut else_body = vec![];
    if terminator.is(ELSE) {
        (else_body, _) = parse_block(parser, IF, &[END])?;
    }

    Ok(Stmt::Conditional(ConditionalStmt {
        if_condition,
        if_body,
        elif_condition,
        elif_body,
        else_body,
    }))
}

pub fn parse_while_loop_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    TRACE!(parser, "while-loop statement");

    parser.advance()?;
    let condition = parse_expr(parser)?;
    let (body, _) = parse_block(parser, WHILE, &[END])?;

    Ok(Stmt::WhileLoop(WhileLoopStmt { condition, body }))
}

pub fn parse_for_loop_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    TRACE!(parser, "for-loop statement");

    parser.advance()?;
    let index = parser.expect_identifier()?;
    parser.expect_next(IN)?;

    parser.advance()?;
    let sequence = parse_expr(parser)?;
    let (body, _) = parse_block(parser, FOR, &[END])?;

    Ok(Stmt::ForLoop(ForLoopStmt {
        index,
        sequence,
        body,
    }))
}

pub fn parse_structure_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    TRACE!(parser, "structure statement");

    parser.advance()?;
    let name = parser.expect_identifier()?;

    let mut members = vec![];
    loop {
        let token = parser
            .advance()
            .map_err(|error| unterminated(parser, error, DAT))?;

        if token.is(END) {
            break;
        }
        if token.is(COMMA) {
            continue;
        }

        let member = parser
            .expect_identifier()
            .map_err(|_| parser.syntax_error(vec!["identifier", COMMA, END]))?;
        members.push(member);
    }

    Ok(Stmt::Structure(StructureStmt { name, members }))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    TRACE!(parser, "assignment statement");

    let target = parser.expect_identifier()?;
    parser.expect_next(ASSIGN)?;

    parser.advance()?;
    let value = parse_expr(parser)?;

    Ok(Stmt::Assignment(AssignmentStmt { target, value }))
}

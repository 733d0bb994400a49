use crate::{
    ast::expressions::{Expr, Operator},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        patterns::{is_number, is_value, number_value},
        tokens::{CLOSE_BRACKET, CLOSE_PAREN, COLON, COMMA, DOUBLE_QUOTE, SINGLE_QUOTE, TRUE},
    },
    TRACE,
};

use super::{lookups::NUD_LOOKUP, parser::Parser};

/// Parses an operand and, when an operator follows, the right-hand expression.
///
/// There is no precedence table: `a < b + c` nests to the right as
/// `a < (b + c)`, never to the left.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        TRACE!(parser, "expression");

        let left = parse_operand(parser)?;

        let operator = match parser.cursor().peek(1) {
            Ok(next) => Operator::from_symbol(next.text),
            Err(error) if error.is_end_of_stream() => None,
            Err(error) => return Err(error),
        };

        let Some(operator) = operator else {
            return Ok(left);
        };

        parser.advance()?;
        parser.advance()?;
        let right = parse_expr(parser)?;

        Ok(Expr::condition(left, operator, right))
    })
}

pub fn parse_operand(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current()?;

    if let Some(handler) = NUD_LOOKUP.get(token.text) {
        return handler(parser);
    }

    if is_number(token.text) {
        return parse_number_expr(parser);
    }

    if is_value(token.text) {
        return Ok(Expr::identifier(token.text));
    }

    Err(parser.syntax_error(vec!["expression"]))
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current()?;

    number_value(token.text).map(Expr::Number).ok_or_else(|| {
        parser.cursor().error(ErrorImpl::NumberParseError {
            token: token.text.to_string(),
        })
    })
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Boolean(parser.current()?.is(TRUE)))
}

pub fn parse_null_expr(_parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Null)
}

/// Turns stream exhaustion inside a literal into a malformed literal error.
fn malformed(parser: &Parser, error: Error, literal: &'static str, message: &str) -> Error {
    if error.is_end_of_stream() {
        parser.cursor().error(ErrorImpl::MalformedLiteral {
            literal,
            message: message.to_string(),
        })
    } else {
        error
    }
}

/// `" words "`: the value is the source text between the two markers, minus
/// the one separating space next to each marker.
pub fn parse_string_expr(parser: &mut Parser) -> Result<Expr, Error> {
    TRACE!(parser, "string literal");

    let open = parser.current()?;

    loop {
        let token = parser
            .advance()
            .map_err(|error| malformed(parser, error, "string", "missing closing `\"`"))?;

        if token.is(DOUBLE_QUOTE) {
            let text = &parser.source()[open.end()..token.offset];
            let text = text.strip_prefix(' ').unwrap_or(text);
            let text = text.strip_suffix(' ').unwrap_or(text);

            return Ok(Expr::String(text.to_string()));
        }
    }
}

/// `' c '`: exactly one single-character token between the markers.
pub fn parse_character_expr(parser: &mut Parser) -> Result<Expr, Error> {
    TRACE!(parser, "character literal");

    let token = parser
        .advance()
        .map_err(|error| malformed(parser, error, "character", "missing character"))?;

    let mut chars = token.text.chars();
    let value = match (chars.next(), chars.next()) {
        (Some(value), None) if !token.is(SINGLE_QUOTE) => value,
        _ => {
            return Err(parser.cursor().error(ErrorImpl::MalformedLiteral {
                literal: "character",
                message: format!("expected exactly one character, found `{}`", token.text),
            }))
        }
    };

    let close = parser
        .advance()
        .map_err(|error| malformed(parser, error, "character", "missing closing `'`"))?;

    if !close.is(SINGLE_QUOTE) {
        return Err(parser.cursor().error(ErrorImpl::MalformedLiteral {
            literal: "character",
            message: format!("expected closing `'`, found `{}`", close.text),
        }));
    }

    Ok(Expr::Character(value))
}

pub fn parse_nested_expr(parser: &mut Parser) -> Result<Expr, Error> {
    TRACE!(parser, "nested expression");

    parser.advance()?;
    let inner = parse_expr(parser)?;
    parser.expect_next(CLOSE_PAREN)?;

    Ok(Expr::Nested(Box::new(inner)))
}

/// `[ a , b , c ]` is a list, `[ start : stop ]` or `[ start : stop : step ]`
/// a sequence. The token after the first element decides which.
pub fn parse_bracket_expr(parser: &mut Parser) -> Result<Expr, Error> {
    TRACE!(parser, "list or sequence");

    parser.advance()?;
    let start = parse_expr(parser)?;
    let token = parser.advance()?;

    if token.is(COMMA) {
        let mut elements = vec![start];

        loop {
            parser.advance()?;
            elements.push(parse_expr(parser)?);

            let token = parser.advance()?;
            if token.is(CLOSE_BRACKET) {
                return Ok(Expr::List(elements));
            }
            if !token.is(COMMA) {
                return Err(parser.syntax_error(vec![COMMA, CLOSE_BRACKET]));
            }
        }
    }

    if !token.is(COLON) {
        return Err(parser.syntax_error(vec![COMMA, COLON]));
    }

    parser.advance()?;
    let stop = parse_expr(parser)?;

    let token = parser.advance()?;
    let step = if token.is(CLOSE_BRACKET) {
        Expr::Empty
    } else if token.is(COLON) {
        parser.advance()?;
        let step = parse_expr(parser)?;
        parser.expect_next(CLOSE_BRACKET)?;
        step
    } else {
        return Err(parser.syntax_error(vec![COLON, CLOSE_BRACKET]));
    };

    Ok(Expr::sequence(start, stop, step))
}

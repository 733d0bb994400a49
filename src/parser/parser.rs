//! Parser state and the parse driver.
//!
//! This module contains the Parser struct, which pairs the token cursor with
//! the parse context, and the `parse` entry points that run the statement
//! grammar over a whole program.
//!
//! Grammar procedures follow one convention: each is entered with the cursor
//! on its first token and returns with the cursor on its last token. The
//! caller advances past it.

use log::{info, warn};

use crate::{
    ast::{ast::Program, expressions::Identifier},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{tokenize, Whitespace},
        patterns::{is_identifier, is_keyword},
        tokens::Token,
    },
};

use super::{cursor::Cursor, stmt::parse_stmt};

/// Default limit on how deeply statements and expressions may nest.
///
/// One level of bracket nesting costs several frames in a debug build, so the
/// limit keeps the deepest accepted input well inside a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Log every grammar production entered, at `debug` level
    pub trace: bool,
    /// Nesting depth at which parsing fails with `NestingTooDeep`
    pub max_depth: usize,
    /// How the source is split into words
    pub whitespace: Whitespace,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            trace: false,
            max_depth: DEFAULT_MAX_DEPTH,
            whitespace: Whitespace::Single,
        }
    }
}

impl ParseConfig {
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }
}

/// Per-parse state shared by every grammar procedure.
#[derive(Debug, Clone)]
pub struct ParseContext {
    config: ParseConfig,
    depth: usize,
}

impl ParseContext {
    pub fn new(config: ParseConfig) -> Self {
        ParseContext { config, depth: 0 }
    }

    pub fn tracing(&self) -> bool {
        self.config.trace
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }
}

/// The main parser structure that maintains parsing state.
///
/// Holds the source text (string literals are sliced from it), the cursor
/// over its tokens, and the parse context.
pub struct Parser<'src> {
    source: &'src str,
    cursor: Cursor<'src>,
    context: ParseContext,
}

impl<'src> Parser<'src> {
    /// Tokenizes `source` and positions the cursor on the first token.
    pub fn new(source: &'src str, config: ParseConfig) -> Self {
        let tokens = tokenize(source, config.whitespace);

        Parser {
            source,
            cursor: Cursor::new(tokens, source.len()),
            context: ParseContext::new(config),
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'src> {
        &mut self.cursor
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    pub fn current(&self) -> Result<Token<'src>, Error> {
        self.cursor.current()
    }

    pub fn advance(&mut self) -> Result<Token<'src>, Error> {
        self.cursor.advance()
    }

    /// A syntax error at the current token.
    pub fn syntax_error(&self, expected: Vec<&'static str>) -> Error {
        self.cursor.error(ErrorImpl::SyntaxError {
            found: self.cursor.current_text().to_string(),
            expected,
        })
    }

    /// Checks that the current token is `symbol`, without moving.
    pub fn expect(&self, symbol: &'static str) -> Result<Token<'src>, Error> {
        let token = self.current()?;

        if token.is(symbol) {
            Ok(token)
        } else {
            Err(self.syntax_error(vec![symbol]))
        }
    }

    /// Advances, then checks that the new current token is `symbol`.
    pub fn expect_next(&mut self, symbol: &'static str) -> Result<Token<'src>, Error> {
        self.advance()?;
        self.expect(symbol)
    }

    /// Reads the current token as a name. Reserved words are not names.
    pub fn expect_identifier(&self) -> Result<Identifier, Error> {
        let token = self.current()?;

        if is_identifier(token.text) && !is_keyword(token.text) {
            Ok(Identifier::new(token.text))
        } else {
            Err(self.syntax_error(vec!["identifier"]))
        }
    }

    /// Runs `production` one nesting level deeper, failing once the
    /// configured depth limit is passed.
    pub fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.context.depth >= self.context.config.max_depth {
            return Err(self.cursor.error(ErrorImpl::NestingTooDeep {
                limit: self.context.config.max_depth,
            }));
        }

        self.context.depth += 1;
        let result = production(self);
        self.context.depth -= 1;

        result
    }
}

/// Parses source text into a Program using the default configuration.
///
/// See [`parse_with_config`].
pub fn parse(source: &str) -> (Program, Option<Error>) {
    parse_with_config(source, ParseConfig::default())
}

/// Parses source text into a Program.
///
/// Statements are parsed one after another until the token stream runs out.
/// The first error stops parsing.
///
/// # Returns
///
/// A tuple containing:
/// - The Program built so far (every statement parsed before any error)
/// - The error that stopped parsing, if any
pub fn parse_with_config(source: &str, config: ParseConfig) -> (Program, Option<Error>) {
    let mut parser = Parser::new(source, config);
    let mut program = Program::new();

    info!("parsing {} tokens", parser.cursor().len());

    while parser.cursor().is_live() {
        match parse_stmt(&mut parser) {
            Ok(stmt) => program.push(stmt),
            Err(error) => {
                warn!("parsing stopped after {} statements: {}", program.len(), error);
                return (program, Some(error));
            }
        }

        if let Err(error) = parser.advance() {
            if error.is_end_of_stream() {
                break;
            }
            return (program, Some(error));
        }
    }

    info!("parsed {} statements", program.len());

    (program, None)
}

//! A position-tracked view over the token sequence.
//!
//! Every grammar procedure reads and moves the same cursor in place, so no
//! procedure has to hand an updated position back to its caller.

use crate::{
    errors::errors::{Error, ErrorImpl, Snippet},
    lexer::tokens::Token,
    Position,
};

/// Number of consumed tokens shown before the offending one in a snippet.
const SNIPPET_WINDOW: usize = 5;

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    tokens: Vec<Token<'src>>,
    index: usize,
    /// Length of the source, reported as the offset once the cursor is exhausted
    source_len: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(tokens: Vec<Token<'src>>, source_len: usize) -> Self {
        Cursor {
            tokens,
            index: 0,
            source_len,
        }
    }

    /// True while the index points at a token.
    pub fn is_live(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn current(&self) -> Result<Token<'src>, Error> {
        self.tokens
            .get(self.index)
            .copied()
            .ok_or_else(|| self.error(ErrorImpl::OutOfBounds))
    }

    /// Text of the current token, or an empty string once exhausted.
    pub fn current_text(&self) -> &'src str {
        self.tokens.get(self.index).map_or("", |token| token.text)
    }

    /// Looks `offset` tokens ahead without moving.
    pub fn peek(&self, offset: usize) -> Result<Token<'src>, Error> {
        self.tokens
            .get(self.index + offset)
            .copied()
            .ok_or_else(|| self.error(ErrorImpl::EndOfStream))
    }

    /// Moves to the next token and returns it. Stepping past the last token
    /// exhausts the cursor.
    pub fn advance(&mut self) -> Result<Token<'src>, Error> {
        if self.index < self.tokens.len() {
            self.index += 1;
        }

        self.tokens
            .get(self.index)
            .copied()
            .ok_or_else(|| self.error(ErrorImpl::EndOfStream))
    }

    /// Moves back one token and returns it.
    ///
    /// # Panics
    ///
    /// Panics when called on the first token.
    pub fn retreat(&mut self) -> Token<'src> {
        if self.index == 0 {
            panic!("cursor retreated before the first token");
        }

        self.index -= 1;
        self.tokens[self.index]
    }

    /// Jumps to an absolute index. The position is left untouched when the
    /// index is out of range.
    pub fn seek(&mut self, index: usize) -> Result<Token<'src>, Error> {
        match self.tokens.get(index) {
            Some(token) => {
                self.index = index;
                Ok(*token)
            }
            None => Err(self.error(ErrorImpl::EndOfStream)),
        }
    }

    /// Tokens strictly before the current index.
    pub fn consumed_prefix(&self) -> &[Token<'src>] {
        &self.tokens[..self.index.min(self.tokens.len())]
    }

    pub fn get_position(&self) -> Position {
        let offset = self
            .tokens
            .get(self.index)
            .map_or(self.source_len, |token| token.offset);

        Position::new(self.index, offset)
    }

    /// The last few consumed tokens followed by the current one, with the
    /// caret under the current token.
    pub fn snippet(&self) -> Snippet {
        let prefix = self.consumed_prefix();
        let window = &prefix[prefix.len().saturating_sub(SNIPPET_WINDOW)..];

        let mut line = window
            .iter()
            .map(|token| token.text)
            .collect::<Vec<_>>()
            .join(" ");

        if !line.is_empty() {
            line.push(' ');
        }
        // Column in characters, matching how the snippet pads its caret line
        let caret = line.chars().count();
        line.push_str(self.current_text());

        Snippet { line, caret }
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position()).with_snippet(self.snippet())
    }
}

use crate::ast::Node;
use crate::lexer::Token;
use logos::Logos;
use minic_source::{Source, SyntaxError};
use std::mem;
use std::ops::Range;
use tracing::{debug, trace};

mod expr;
mod stmt;

pub type ParseResult<T> = Result<T, SyntaxError>;

pub struct Parser<'a> {
    /// All tokens of the source with their spans. Always terminated by [`Token::Eof`].
    tokens: Vec<(Token, Range<usize>)>,
    /// Index of the current token in `tokens`.
    cursor: usize,
    /// Source code
    source: &'a Source<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a Source<'a>) -> Self {
        let mut lexer = Token::lexer(source.content);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next() {
            tokens.push((token, lexer.span()));
        }
        let end = source.content.len();
        tokens.push((Token::Eof, end..end));

        Self {
            tokens,
            cursor: 0,
            source,
        }
    }
}

impl<'a> Parser<'a> {
    /// Parses a whole program.
    ///
    /// Returns the root [`Node::Compound`] holding every top-level item, or `None` if no tree was produced, either
    /// because the program is empty or because of a syntax error. Syntax errors are reported to the [`Source`];
    /// parsing stops at the first one.
    pub fn parse_program(&mut self) -> Option<Node> {
        debug!(bytes = self.source.content.len(), "parsing program");

        let mut items = Vec::new();
        while *self.current() != Token::Eof {
            match self.parse_item() {
                Ok(item) => {
                    trace!(kind = %item.kind(), "parsed top-level item");
                    items.push(item);
                }
                Err(err) => {
                    debug!(error = %err, span = ?err.span(), "syntax error");
                    self.source.errors.add_error(err);
                    return None;
                }
            }
        }

        debug!(items = items.len(), "finished parsing program");
        if items.is_empty() {
            None
        } else {
            Some(Node::compound(items))
        }
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    /// Returns the token `n` positions after the current one, or [`Token::Eof`] past the end.
    fn nth(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.cursor + n).min(last)].0
    }

    fn current(&self) -> &Token {
        self.nth(0)
    }

    fn span(&self) -> Range<usize> {
        self.tokens[self.cursor].1.clone()
    }

    fn next(&mut self) {
        if self.cursor < self.tokens.len() - 1 {
            self.cursor += 1;
        }
    }

    /// Predicate that tests whether the next token has the same discriminant and eats the next token if yes as a side effect.
    fn eat(&mut self, tok: Token) -> bool {
        if mem::discriminant(self.current()) == mem::discriminant(&tok) {
            self.next(); // eat token
            true
        } else {
            false
        }
    }

    fn expect(&mut self, tok: Token) -> ParseResult<()> {
        if self.eat(tok.clone()) {
            Ok(())
        } else {
            Err(self.unexpected(&tok.to_string()))
        }
    }

    fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.current().clone() {
            Token::Identifier(ident) => {
                self.next();
                Ok(ident)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Creates an unexpected token error at the current token.
    fn unexpected(&self, expected: &str) -> SyntaxError {
        let span = self.span();
        let message = match self.current() {
            Token::Error => {
                let slice = &self.source.content[span.clone()];
                if slice.starts_with("/*") {
                    "Unterminated block comment".to_string()
                } else if slice.bytes().all(|b| b.is_ascii_digit()) {
                    format!("Integer literal `{}` is out of range", slice)
                } else {
                    format!("Unexpected character `{}`", slice)
                }
            }
            found => format!("Expected {}, found {}", expected, found),
        };
        SyntaxError::new(message, span)
    }
}

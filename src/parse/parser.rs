use super::ast::*;
use super::error::{ParseError, ParseErrorKind};
use super::lexer::{Token, TokenKind};
use crate::common::*;

/// Recursive-descent parser over an already tokenized dice expression.
///
/// Every production returns a node. When the input does not fit the
/// grammar the parser records a [`ParseError`], substitutes something
/// sensible and carries on, so a tree is always produced.
pub(crate) struct Parser<'t, 's> {
    tokens: &'t [Token<'s>],
    pos: usize,
    errors: Vec<ParseError>,
}

impl<'t, 's> Parser<'t, 's> {
    pub fn new(tokens: &'t [Token<'s>]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    fn peek(&self) -> Option<&'t Token<'s>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn matches(&self, kind: TokenKind) -> bool {
        self.peek().map_or(false, |token| token.kind == kind)
    }

    fn consume(&mut self, expected: TokenKind) -> bool {
        if self.matches(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn take_one_of(&mut self, options: &[TokenKind]) -> Option<TokenKind> {
        options.iter().copied().find(|&kind| self.consume(kind))
    }

    /// Consumes the current token whether or not it is `expected`.
    fn expect(&mut self, expected: TokenKind) {
        if !self.matches(expected) {
            let found = self.peek().map(|token| token.kind);
            self.error(ParseErrorKind::UnexpectedToken {
                found,
                expected: vec![expected],
            });
        }
        self.advance();
    }

    /// Reads a number, falling back to `0` if the current token is not one.
    fn expect_number(&mut self) -> Node {
        let value = match self.peek() {
            Some(token) if token.kind == TokenKind::Integer => token.slice.parse::<Int>().ok(),
            _ => None,
        };
        if value.is_none() {
            self.error(ParseErrorKind::InvalidNumber);
        }
        self.advance();
        Node::new_literal(value.unwrap_or(0))
    }

    fn error(&mut self, kind: ParseErrorKind) {
        let (span, slice) = match self.peek() {
            Some(token) => (token.span.clone(), token.slice.to_string()),
            None => {
                let end = self.tokens.last().map_or(0, |token| token.span.end);
                (end..end, String::new())
            }
        };
        let error = ParseError {
            kind,
            position: self.pos.min(self.tokens.len()),
            span,
            slice,
        };
        tracing::debug!("recovering from {}", error);
        self.errors.push(error);
    }

    /// Flags any tokens left over after the expression.
    pub fn check_consumed(&mut self) {
        if self.pos < self.tokens.len() {
            let count = self.tokens.len() - self.pos;
            self.error(ParseErrorKind::TrailingTokens { count });
        }
    }

    pub fn parse_expression(&mut self) -> Node {
        if self.consume(TokenKind::Secret) {
            tracing::trace!("discarding secret roll marker");
        }
        self.parse_addition()
    }

    fn parse_addition(&mut self) -> Node {
        let mut lhs = self.parse_multiplication();

        while let Some(kind) = self.take_one_of(TokenKind::ADDITION_OPS) {
            let op = match kind {
                TokenKind::Plus => BinaryOperator::Add,
                _ => BinaryOperator::Sub,
            };
            let rhs = self.parse_multiplication();

            lhs = Node::new_binary(lhs, op, rhs);
        }

        lhs
    }

    fn parse_multiplication(&mut self) -> Node {
        let mut lhs = self.parse_unary_prefix();

        loop {
            if self.consume(TokenKind::Star) {
                let rhs = self.parse_unary_prefix();
                lhs = Node::new_binary(lhs, BinaryOperator::Mul, rhs);
            } else if self.consume(TokenKind::Slash) {
                let rhs = self.parse_unary_prefix();
                let rounding = self
                    .take_one_of(TokenKind::ROUNDING_SUFFIXES)
                    .and_then(|kind| kind.as_rounding());
                lhs = Node::new_divide(lhs, rhs, rounding);
            } else {
                break lhs;
            }
        }
    }

    /// Signs fold pairwise, so only the parity of the minus count matters.
    fn parse_unary_prefix(&mut self) -> Node {
        let mut negated = false;
        while let Some(kind) = self.take_one_of(TokenKind::ADDITION_OPS) {
            if kind == TokenKind::Minus {
                negated = !negated;
            }
        }

        let term = self.parse_term();
        if negated {
            term.negate()
        } else {
            term
        }
    }

    fn parse_term(&mut self) -> Node {
        let times = self.expect_number();
        if !self.matches(TokenKind::Dice) {
            return times;
        }

        self.expect(TokenKind::Dice);
        let sides = self.expect_number();
        let critical = if self.consume(TokenKind::At) {
            Some(self.expect_number())
        } else {
            None
        };

        Node::new_dice(DiceRoll::new(times, sides, critical))
    }
}

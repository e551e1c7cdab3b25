use crate::common::Int;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use thiserror::Error;

type EResult<T = Int> = Result<T, EvalError>;

/// Resolves the right-hand side of a comparison to a number.
pub trait Evaluate {
    fn evaluate(&self, expr: &str) -> EResult;
}

impl<F> Evaluate for F
where
    F: Fn(&str) -> EResult,
{
    fn evaluate(&self, expr: &str) -> EResult {
        self(expr)
    }
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    #[error("unexpected {found:?} at position {position}")]
    UnexpectedToken { position: usize, found: String },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error("integer overflow")]
    Overflow,
    #[error("parentheses nested deeper than {limit}")]
    TooDeep { limit: usize },
    #[error("{0}")]
    Invalid(String),
}

impl EvalError {
    pub fn invalid(msg: impl ToString) -> Self {
        Self::Invalid(msg.to_string())
    }
}

/// Integer arithmetic with `+ - * /`, unary signs and parentheses.
/// Division rounds toward negative infinity.
#[derive(Debug, Default, Copy, Clone)]
pub struct ArithmeticEvaluator;

impl ArithmeticEvaluator {
    pub const MAX_NESTING: usize = 256;
}

impl Evaluate for ArithmeticEvaluator {
    fn evaluate(&self, expr: &str) -> EResult {
        let mut ev = Evaluator::new(expr);
        let value = ev.parse_expression()?;
        if ev.lexer.next().is_some() {
            return ev.unexpected_token();
        }
        Ok(value)
    }
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
enum ArithToken {
    #[regex(r"[0-9]+")]
    Integer,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[regex(r"[ \t\n\r\x0B\x0C]+", logos::skip)]
    #[error]
    Error,
}

struct Evaluator<'a> {
    lexer: PeekableLexer<'a, LogosLexer<'a, ArithToken>, ArithToken>,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            lexer: ArithToken::lexer(s).peekable_lexer(),
            depth: 0,
        }
    }

    fn matches(&mut self, kind: ArithToken) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn consume(&mut self, expected: ArithToken) -> bool {
        if self.matches(expected) {
            self.lexer.next();
            true
        } else {
            false
        }
    }

    /// Reports the most recently consumed token.
    fn unexpected_token<T>(&mut self) -> EResult<T> {
        Err(EvalError::UnexpectedToken {
            position: self.lexer.span().start,
            found: self.lexer.slice().to_string(),
        })
    }

    fn parse_expression(&mut self) -> EResult {
        let mut lhs = self.parse_multiplication()?;

        loop {
            if self.consume(ArithToken::Plus) {
                let rhs = self.parse_multiplication()?;
                lhs = lhs.checked_add(rhs).ok_or(EvalError::Overflow)?;
            } else if self.consume(ArithToken::Minus) {
                let rhs = self.parse_multiplication()?;
                lhs = lhs.checked_sub(rhs).ok_or(EvalError::Overflow)?;
            } else {
                break Ok(lhs);
            }
        }
    }

    fn parse_multiplication(&mut self) -> EResult {
        let mut lhs = self.parse_unary_prefix()?;

        loop {
            if self.consume(ArithToken::Star) {
                let rhs = self.parse_unary_prefix()?;
                lhs = lhs.checked_mul(rhs).ok_or(EvalError::Overflow)?;
            } else if self.consume(ArithToken::Slash) {
                let rhs = self.parse_unary_prefix()?;
                lhs = floor_div(lhs, rhs)?;
            } else {
                break Ok(lhs);
            }
        }
    }

    fn parse_unary_prefix(&mut self) -> EResult {
        let mut negated = false;
        loop {
            if self.consume(ArithToken::Minus) {
                negated = !negated;
            } else if !self.consume(ArithToken::Plus) {
                break;
            }
        }

        let value = self.parse_atom()?;
        if negated {
            value.checked_neg().ok_or(EvalError::Overflow)
        } else {
            Ok(value)
        }
    }

    fn parse_atom(&mut self) -> EResult {
        match self.lexer.next() {
            Some(ArithToken::Integer) => self
                .lexer
                .slice()
                .parse()
                .map_err(|_| EvalError::Overflow),
            Some(ArithToken::LeftParen) => {
                if self.depth == ArithmeticEvaluator::MAX_NESTING {
                    return Err(EvalError::TooDeep {
                        limit: ArithmeticEvaluator::MAX_NESTING,
                    });
                }
                self.depth += 1;
                let inner = self.parse_expression()?;
                self.depth -= 1;
                if self.consume(ArithToken::RightParen) {
                    Ok(inner)
                } else if self.lexer.next().is_some() {
                    self.unexpected_token()
                } else {
                    Err(EvalError::UnexpectedEnd)
                }
            }
            Some(_) => self.unexpected_token(),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

fn floor_div(l: Int, r: Int) -> EResult {
    if r == 0 {
        return Err(EvalError::ZeroDivision);
    }
    let q = l.checked_div(r).ok_or(EvalError::Overflow)?;
    if l % r != 0 && (l < 0) != (r < 0) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

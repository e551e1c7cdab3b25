use super::lexer::TokenKind;
use crate::common::NonEmpty;
use crate::eval::EvalError;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// A single recovered problem. Parsing continues after every one of these.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("error at token {position} ({slice:?}): {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Index into the token stream; equal to the token count when the
    /// problem is a missing token at the end of input.
    pub position: usize,
    /// Byte range in the text the token came from.
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// A number was required; `0` was used in its place.
    InvalidNumber,
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: Vec<TokenKind>,
    },
    /// Tokens remained after the whole expression was read.
    TrailingTokens { count: usize },
    InvalidTarget(EvalError),
    UnknownComparison,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber => f.write_str("expected a number"),
            Self::UnexpectedToken { found, expected } => {
                match found {
                    Some(found) => write!(f, "unexpected token: found {}, expected ", found)?,
                    None => f.write_str("unexpected end of input, expected ")?,
                }
                fmt_expected(expected, f)
            }
            Self::TrailingTokens { count: 1 } => f.write_str("1 unparsed token at end of input"),
            Self::TrailingTokens { count } => {
                write!(f, "{} unparsed tokens at end of input", count)
            }
            Self::InvalidTarget(why) => write!(f, "invalid comparison target: {}", why),
            Self::UnknownComparison => f.write_str("unknown comparison operator"),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => Ok(()),
        [a] => f.write_str(a.as_str()),
        [a, b] => write!(f, "{} or {}", a, b),
        [init @ .., last] => {
            for exp in init {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}

/// Every problem found by a parse that was asked to be strict.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseErrors(pub NonEmpty<ParseError>);

impl ParseErrors {
    pub fn from_vec(errors: Vec<ParseError>) -> Option<Self> {
        NonEmpty::try_from(errors).ok().map(Self)
    }

    pub fn first(&self) -> &ParseError {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.0.iter()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.first(), f)?;
        match self.0.len() - 1 {
            0 => Ok(()),
            1 => f.write_str(" (and 1 more error)"),
            n => write!(f, " (and {} more errors)", n),
        }
    }
}

impl std::error::Error for ParseErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            position: 2,
            span: 2..3,
            slice: "x".to_string(),
        }
    }

    #[test]
    fn test_display_unexpected_token() {
        let err = error(ParseErrorKind::UnexpectedToken {
            found: Some(TokenKind::Star),
            expected: vec![TokenKind::Integer, TokenKind::Plus, TokenKind::Minus],
        });
        assert_eq!(
            err.to_string(),
            "error at token 2 (\"x\"): unexpected token: found '*', expected <integer>, '+', or '-'"
        );
    }

    #[test]
    fn test_display_error_list() {
        let one = ParseErrors::from_vec(vec![error(ParseErrorKind::InvalidNumber)]).unwrap();
        assert_eq!(one.to_string(), "error at token 2 (\"x\"): expected a number");

        let three = ParseErrors::from_vec(vec![
            error(ParseErrorKind::InvalidNumber),
            error(ParseErrorKind::UnknownComparison),
            error(ParseErrorKind::TrailingTokens { count: 2 }),
        ])
        .unwrap();
        assert_eq!(
            three.to_string(),
            "error at token 2 (\"x\"): expected a number (and 2 more errors)"
        );
        assert_eq!(
            three.iter().map(|e| &e.kind).collect::<Vec<_>>(),
            vec![
                &ParseErrorKind::InvalidNumber,
                &ParseErrorKind::UnknownComparison,
                &ParseErrorKind::TrailingTokens { count: 2 },
            ]
        );
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        assert_eq!(ParseErrors::from_vec(Vec::new()), None);
    }
}

use crate::common::Rounding;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// One lexeme of the dice side of a command.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub slice: &'a str,
    pub span: Range<usize>,
}

/// Splits `s` into tokens. Digit runs stay fused, every structural
/// character is a token of its own, and anything else between ASCII
/// whitespace becomes a [`TokenKind::Word`] for the parser to reject.
pub fn tokenize(s: &str) -> Vec<Token<'_>> {
    let tokens: Vec<_> = TokenKind::lexer(s)
        .spanned()
        .map(|(kind, span)| Token {
            kind,
            slice: &s[span.clone()],
            span,
        })
        .collect();
    tracing::trace!(
        "tokenized {:?} into {:?}",
        s,
        tokens.iter().map(|t| t.slice).collect::<Vec<_>>()
    );
    tokens
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
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
    #[token("D")]
    Dice,
    #[token("U")]
    RoundUp,
    #[token("R")]
    Round,
    #[token("S")]
    Secret,
    #[token("@")]
    At,

    #[regex(r"[0-9]*[^ \t\n\r\x0B\x0C0-9+\-*/DURS@][^ \t\n\r\x0B\x0C+\-*/DURS@]*")]
    Word,

    #[regex(r"[ \t\n\r\x0B\x0C]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub const ADDITION_OPS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub const ROUNDING_SUFFIXES: &'static [Self] = &[Self::RoundUp, Self::Round];

    pub fn as_rounding(&self) -> Option<Rounding> {
        match self {
            Self::RoundUp => Some(Rounding::Up),
            Self::Round => Some(Rounding::Nearest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Integer => "<integer>",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            Dice => "'D'",
            RoundUp => "'U'",
            Round => "'R'",
            Secret => "'S'",
            At => "'@'",
            Word => "<word>",
            Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slices(s: &str) -> Vec<&str> {
        tokenize(s).into_iter().map(|t| t.slice).collect()
    }

    fn kinds(s: &str) -> Vec<TokenKind> {
        tokenize(s).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_structural_chars_split() {
        assert_eq!(slices("2D6+3"), vec!["2", "D", "6", "+", "3"]);
        assert_eq!(slices("S10D10@9"), vec!["S", "10", "D", "10", "@", "9"]);
        assert_eq!(slices("7/2U*3R"), vec!["7", "/", "2", "U", "*", "3", "R"]);
    }

    #[test]
    fn test_whitespace_only_separates() {
        assert_eq!(slices("  2 +\t3 4 "), vec!["2", "+", "3", "4"]);
        assert_eq!(slices(""), Vec::<&str>::new());
        assert_eq!(slices("   "), Vec::<&str>::new());
        assert_eq!(slices("1\x0B+\x0C2\r\n"), vec!["1", "+", "2"]);
    }

    #[test]
    fn test_unicode_spaces_do_not_separate() {
        assert_eq!(slices("2\u{a0}+3"), vec!["2\u{a0}", "+", "3"]);
        assert_eq!(kinds("2\u{a0}"), vec![TokenKind::Word]);
        assert_eq!(slices("1\u{3000}D6"), vec!["1\u{3000}", "D", "6"]);
    }

    #[test]
    fn test_adjacent_operators_are_not_validated() {
        assert_eq!(
            kinds("1+*2"),
            vec![
                TokenKind::Integer,
                TokenKind::Plus,
                TokenKind::Star,
                TokenKind::Integer
            ]
        );
    }

    #[test]
    fn test_unknown_runs_stay_fused() {
        assert_eq!(slices("2Dx"), vec!["2", "D", "x"]);
        assert_eq!(slices("(1D100)/2U"), vec!["(1", "D", "100)", "/", "2", "U"]);
        assert_eq!(kinds("3a"), vec![TokenKind::Word]);
        assert_eq!(kinds("d6"), vec![TokenKind::Word]);
    }

    #[test]
    fn test_spans_point_into_source() {
        let tokens = tokenize("12 D 4");
        assert_eq!(tokens[0].span, 0..2);
        assert_eq!(tokens[1].span, 3..4);
        assert_eq!(tokens[2].span, 5..6);
    }
}

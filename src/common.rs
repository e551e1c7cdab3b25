use std::fmt::{self, Write};

pub type Int = i64;

pub type NonEmpty<T> = vec1::Vec1<T>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
}

impl BinaryOperator {
    /// The operator with the opposite sign, used when folding a negative
    /// right operand into an addition or subtraction.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Add => Self::Sub,
            Self::Sub => Self::Add,
            Self::Mul => Self::Mul,
        }
    }

    pub(crate) const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul => 2,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
        };
        f.write_char(c)
    }
}

/// Rounding mode attached to a division.
///
/// A division without a suffix is left to the evaluator's default, which for
/// this crate's own [`ArithmeticEvaluator`](crate::ArithmeticEvaluator) is
/// floor division.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rounding {
    /// `U`: round the quotient up.
    Up,
    /// `R`: round the quotient to the nearest integer, halves away from zero.
    Nearest,
}

impl Rounding {
    pub const fn as_char(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Nearest => 'R',
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ComparisonOperator {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Eq => "=",
            Self::Ne => "<>",
        };
        f.write_str(s)
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Target {
    Value(Int),
    /// The `?` marker: describe the outcomes instead of comparing.
    Query,
}

impl Target {
    pub const QUERY_MARKER: &'static str = "?";
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(x) => fmt::Display::fmt(x, f),
            Self::Query => f.write_str(Self::QUERY_MARKER),
        }
    }
}

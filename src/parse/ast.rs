use crate::common::*;

/// Root of a parsed dice command.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Command {
    pub body: Node,
    pub comparison: Option<Comparison>,
}

impl Command {
    pub fn new(body: Node, comparison: Option<Comparison>) -> Self {
        Self { body, comparison }
    }

    pub fn operator(&self) -> Option<ComparisonOperator> {
        self.comparison.map(|c| c.operator)
    }

    pub fn target(&self) -> Option<Target> {
        self.comparison.map(|c| c.target)
    }
}

/// Operator and target are only ever present together.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Comparison {
    pub operator: ComparisonOperator,
    pub target: Target,
}

impl Comparison {
    pub fn new(operator: ComparisonOperator, target: Target) -> Self {
        Self { operator, target }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    Number(Int),
    Binary(Box<Node>, BinaryOperator, Box<Node>),
    Divide(Box<Node>, Box<Node>, Option<Rounding>),
    /// Never wraps a `Number` or another `Negate`; see [`Node::negate`].
    Negate(Box<Node>),
    Dice(DiceRoll),
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DiceRoll {
    pub times: Box<Node>,
    pub sides: Box<Node>,
    pub critical: Option<Box<Node>>,
}

impl DiceRoll {
    pub fn new(times: Node, sides: Node, critical: Option<Node>) -> Self {
        Self {
            times: Box::new(times),
            sides: Box::new(sides),
            critical: critical.map(Box::new),
        }
    }
}

impl Node {
    pub fn new_literal(x: Int) -> Self {
        Self::Number(x)
    }

    /// Builds `l op r`, rewriting `l + -n` as `l - n` and `l - -n` as `l + n`.
    pub fn new_binary(l: Node, op: BinaryOperator, r: Node) -> Self {
        match (op, r) {
            (BinaryOperator::Add | BinaryOperator::Sub, Self::Number(x)) if x < 0 => {
                Self::Binary(Box::new(l), op.flipped(), Box::new(Self::Number(x.wrapping_neg())))
            }
            (op, r) => Self::Binary(Box::new(l), op, Box::new(r)),
        }
    }

    pub fn new_divide(l: Node, r: Node, rounding: Option<Rounding>) -> Self {
        Self::Divide(Box::new(l), Box::new(r), rounding)
    }

    pub fn new_dice(dice: DiceRoll) -> Self {
        Self::Dice(dice)
    }

    /// Unary minus with folding: `--x` is `x`, `-n` is the literal `-n`.
    pub fn negate(self) -> Self {
        match self {
            Self::Negate(inner) => *inner,
            Self::Number(x) => Self::Number(x.wrapping_neg()),
            other => Self::Negate(Box::new(other)),
        }
    }

    pub fn as_literal(&self) -> Option<Int> {
        match self {
            Self::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Self::Binary(_, op, _) => op.precedence(),
            Self::Divide(..) => BinaryOperator::Mul.precedence(),
            Self::Number(_) | Self::Negate(_) | Self::Dice(_) => 4,
        }
    }
}

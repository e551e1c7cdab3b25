use crate::common::*;
use crate::parse::ast::{Command, DiceRoll, Node};
use crate::parse::visit::{Accept, AstVisitor};
use std::fmt;

const ATOM: u8 = 4;

/// Renders a tree back into the syntax it was parsed from, adding
/// parentheses only where precedence would otherwise change the meaning.
#[derive(Default)]
pub struct Stringifier;

impl Stringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<A: Accept<Self>>(&mut self, a: &A) -> String {
        a.accept(self)
    }

    fn operand(&mut self, node: &Node, min_precedence: u8) -> String {
        let s = self.visit(node);
        if node.precedence() < min_precedence {
            format!("({})", s)
        } else {
            s
        }
    }
}

impl AstVisitor for Stringifier {
    type Output = String;

    fn visit_command(&mut self, cmd: &Command) -> String {
        let body = self.visit(&cmd.body);
        match cmd.comparison {
            Some(c) => format!("{}{}{}", body, c.operator, c.target),
            None => body,
        }
    }

    fn visit_number(&mut self, x: Int) -> String {
        x.to_string()
    }

    fn visit_binary(&mut self, l: &Node, op: BinaryOperator, r: &Node) -> String {
        let prec = op.precedence();
        let l = self.operand(l, prec);
        let r = self.operand(r, prec + 1);
        format!("{}{}{}", l, op, r)
    }

    fn visit_divide(&mut self, l: &Node, r: &Node, rounding: Option<Rounding>) -> String {
        let prec = BinaryOperator::Mul.precedence();
        let l = self.operand(l, prec);
        let r = self.operand(r, prec + 1);
        match rounding {
            Some(rounding) => format!("{}/{}{}", l, r, rounding),
            None => format!("{}/{}", l, r),
        }
    }

    fn visit_negate(&mut self, x: &Node) -> String {
        format!("-{}", self.operand(x, ATOM))
    }

    fn visit_dice(&mut self, dice: &DiceRoll) -> String {
        let mut ret = format!(
            "{}D{}",
            self.operand(&dice.times, ATOM),
            self.operand(&dice.sides, ATOM)
        );
        if let Some(critical) = &dice.critical {
            ret.push('@');
            ret.push_str(&self.operand(critical, ATOM));
        }
        ret
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Stringifier::new().stringify(self))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Stringifier::new().stringify(self))
    }
}

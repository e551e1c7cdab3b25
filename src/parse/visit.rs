use crate::common::*;
use crate::parse::ast;

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_command(&mut self, cmd: &ast::Command) -> Self::Output;

    fn visit_number(&mut self, x: Int) -> Self::Output;

    fn visit_binary(
        &mut self,
        l: &ast::Node,
        op: BinaryOperator,
        r: &ast::Node,
    ) -> Self::Output;

    fn visit_divide(
        &mut self,
        l: &ast::Node,
        r: &ast::Node,
        rounding: Option<Rounding>,
    ) -> Self::Output;

    fn visit_negate(&mut self, x: &ast::Node) -> Self::Output;

    fn visit_dice(&mut self, dice: &ast::DiceRoll) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Command {
    fn accept(&self, v: &mut V) -> V::Output {
        v.visit_command(self)
    }
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Node {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::Number(x) => v.visit_number(*x),
            Self::Binary(l, op, r) => v.visit_binary(l, *op, r),
            Self::Divide(l, r, rounding) => v.visit_divide(l, r, *rounding),
            Self::Negate(x) => v.visit_negate(x),
            Self::Dice(x) => v.visit_dice(x),
        }
    }
}

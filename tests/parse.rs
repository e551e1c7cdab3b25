use dice_command::{
    parse, parse_strict, BinaryOperator, Command, Comparison, ComparisonOperator, DiceRoll, Int,
    Node, ParseErrorKind, Rounding, Target,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn num(x: Int) -> Node {
    Node::new_literal(x)
}

fn dice(times: Int, sides: Int, critical: Option<Int>) -> Node {
    Node::new_dice(DiceRoll::new(num(times), num(sides), critical.map(num)))
}

#[test]
fn precedence() {
    let parsed = parse("1+2*3");
    assert!(!parsed.has_error());
    assert_eq!(
        parsed.command.body,
        Node::new_binary(
            num(1),
            BinaryOperator::Add,
            Node::new_binary(num(2), BinaryOperator::Mul, num(3)),
        )
    );
}

#[test]
fn negative_right_operand_is_canonicalized() {
    let parsed = parse("3+-2");
    assert!(!parsed.has_error());
    assert_eq!(
        parsed.command.body,
        Node::Binary(Box::new(num(3)), BinaryOperator::Sub, Box::new(num(2)))
    );
}

#[test]
fn negative_literal_is_folded() {
    assert_eq!(parse("-5").command.body, Node::Number(-5));
    assert_eq!(parse("--5"), parse("5"));
}

#[test]
fn dice_with_and_without_critical() {
    assert_eq!(parse("2D6@5").command.body, dice(2, 6, Some(5)));
    assert_eq!(parse("2D6").command.body, dice(2, 6, None));
}

#[test]
fn division_rounding() {
    assert_eq!(
        parse("7/2U").command.body,
        Node::new_divide(num(7), num(2), Some(Rounding::Up))
    );
    assert_eq!(parse("7/2").command.body, Node::new_divide(num(7), num(2), None));
}

#[test]
fn comparison() {
    assert_eq!(
        parse_strict("2D6>=5").unwrap(),
        Command::new(
            dice(2, 6, None),
            Some(Comparison::new(ComparisonOperator::Ge, Target::Value(5)))
        )
    );
    assert_eq!(parse_strict("2D6>?").unwrap().target(), Some(Target::Query));
}

#[test]
fn recovery_from_bad_sides() {
    let parsed = parse("2Dx");
    assert!(parsed.has_error());
    assert_eq!(parsed.command.body, dice(2, 0, None));
    assert_eq!(parsed.errors[0].kind, ParseErrorKind::InvalidNumber);
}

#[test]
fn trailing_tokens() {
    let parsed = parse("2+3 4");
    assert!(parsed.has_error());
    assert_eq!(
        parsed.errors[0].kind,
        ParseErrorKind::TrailingTokens { count: 1 }
    );
}

#[test]
fn parenthesized_dice_is_not_part_of_the_grammar() {
    let parsed = parse("(1D100)/2U");
    assert_eq!(
        parsed.command.body,
        Node::new_divide(dice(0, 0, None), num(2), Some(Rounding::Up))
    );
    assert_eq!(
        parsed
            .errors
            .iter()
            .map(|e| (&e.kind, e.slice.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (&ParseErrorKind::InvalidNumber, "(1"),
            (&ParseErrorKind::InvalidNumber, "100)"),
        ]
    );
    assert!(parse_strict("(1D100)/2U").is_err());
}

#[test]
fn display_round_trips() {
    for s in ["2D6+3>=5", "S1D100/2U", "1-2*3D6@6", "-5+4>?", "10/3R<>2"] {
        let parsed = parse(s);
        assert!(!parsed.has_error(), "{:?}", s);
        let reparsed = parse(&parsed.command.to_string());
        assert_eq!(reparsed, parsed, "{:?}", s);
    }
}

proptest! {
    #[test]
    fn integer_literal_parses_to_number(n in 0..=Int::MAX) {
        let parsed = parse(&n.to_string());
        prop_assert!(!parsed.has_error());
        prop_assert_eq!(parsed.command, Command::new(Node::Number(n), None));
    }

    #[test]
    fn even_negations_cancel(n in 0..100_000 as Int, k in 0usize..8) {
        let s = format!("{}{}", "--".repeat(k), n);
        prop_assert_eq!(parse(&s), parse(&n.to_string()));
    }

    #[test]
    fn odd_negations_fold_into_literal(n in 0..100_000 as Int, k in 0usize..8) {
        let s = format!("-{}{}", "--".repeat(k), n);
        prop_assert_eq!(parse(&s).command.body, Node::Number(-n));
    }

    #[test]
    fn arbitrary_input_always_yields_a_tree(s in "[0-9DURS@+*/ <>=?x-]{0,24}") {
        let parsed = parse(&s);
        prop_assert_eq!(parsed.command.operator().is_some(), parsed.command.target().is_some());
    }
}

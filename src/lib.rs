//! Parses dice roll commands such as `2D6+3>=5` or `S1D100/2U` into a
//! syntax tree for an evaluator to run.
//!
//! # Examples
//! ```
//! use dice_command::{parse, ComparisonOperator, Target};
//!
//! let parsed = parse("2D6+3>=5");
//! assert!(!parsed.has_error());
//! assert_eq!(parsed.command.operator(), Some(ComparisonOperator::Ge));
//! assert_eq!(parsed.command.target(), Some(Target::Value(5)));
//! assert_eq!(parsed.command.to_string(), "2D6+3>=5");
//! ```

pub mod common;
mod compare;
pub mod config;
pub mod eval;
pub mod parse;
mod stringify;

pub use common::{BinaryOperator, ComparisonOperator, Int, Rounding, Target};
pub use compare::{NormalizeComparison, StandardComparison};
pub use config::{ParseMode, ParseOptions};
pub use eval::{ArithmeticEvaluator, EvalError, Evaluate};
pub use parse::ast::{Command, Comparison, DiceRoll, Node};
pub use parse::{parse, parse_strict, CommandParser, ParseError, ParseErrorKind, ParseErrors, Parsed};
pub use stringify::Stringifier;

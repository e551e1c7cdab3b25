use super::ast::{Command, Comparison};
use super::error::{ParseError, ParseErrorKind, ParseErrors};
use super::lexer::tokenize;
use super::parser::Parser;
use crate::common::*;
use crate::compare::{NormalizeComparison, StandardComparison};
use crate::config::{ParseMode, ParseOptions};
use crate::eval::{ArithmeticEvaluator, Evaluate};
use std::borrow::Cow;
use std::ops::Range;

/// Outcome of a best-effort parse: always a tree, plus what went wrong.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Parsed {
    pub command: Command,
    pub errors: Vec<ParseError>,
}

impl Parsed {
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Command, ParseErrors> {
        match ParseErrors::from_vec(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(self.command),
        }
    }
}

/// Turns command strings such as `2D6+3>=5` into [`Command`] trees.
///
/// The comparison target is resolved with `E` and the comparison operator
/// with `N`. A `CommandParser` holds no per-input state, so one instance can
/// serve any number of parses.
#[derive(Debug, Default, Clone)]
pub struct CommandParser<E = ArithmeticEvaluator, N = StandardComparison> {
    options: ParseOptions,
    evaluator: E,
    normalizer: N,
}

impl CommandParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E, N> CommandParser<E, N> {
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_evaluator<E2: Evaluate>(self, evaluator: E2) -> CommandParser<E2, N> {
        CommandParser {
            options: self.options,
            evaluator,
            normalizer: self.normalizer,
        }
    }

    pub fn with_normalizer<N2: NormalizeComparison>(self, normalizer: N2) -> CommandParser<E, N2> {
        CommandParser {
            options: self.options,
            evaluator: self.evaluator,
            normalizer,
        }
    }
}

impl<E: Evaluate, N: NormalizeComparison> CommandParser<E, N> {
    /// Parses according to the configured [`ParseMode`]. In best-effort mode
    /// this never fails.
    pub fn run(&self, input: &str) -> Result<Parsed, ParseErrors> {
        let parsed = self.parse(input);
        match self.options.mode {
            ParseMode::BestEffort => Ok(parsed),
            ParseMode::Strict => match ParseErrors::from_vec(parsed.errors.clone()) {
                Some(errors) => Err(errors),
                None => Ok(parsed),
            },
        }
    }

    pub fn parse_strict(&self, input: &str) -> Result<Command, ParseErrors> {
        self.parse(input).into_result()
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse(&self, input: &str) -> Parsed {
        let split = split_comparison(input);
        tracing::debug!(
            "split into {:?} {:?} {:?}",
            split.left,
            split.operator,
            split.right
        );

        let left = if self.options.case_insensitive {
            Cow::Owned(split.left.to_ascii_uppercase())
        } else {
            Cow::Borrowed(split.left)
        };
        let tokens = tokenize(&left);
        let mut parser = Parser::new(&tokens);
        let body = parser.parse_expression();
        tracing::debug!("parsed {} of {} tokens", parser.position(), tokens.len());
        parser.check_consumed();

        let mut errors = parser.into_errors();
        let comparison = self.comparison(&split, tokens.len(), &mut errors);

        Parsed {
            command: Command::new(body, comparison),
            errors,
        }
    }

    fn comparison(
        &self,
        split: &Split<'_>,
        position: usize,
        errors: &mut Vec<ParseError>,
    ) -> Option<Comparison> {
        let right = split.right.trim();
        if split.operator.is_empty() || right.is_empty() {
            return None;
        }

        let mut error = |kind: ParseErrorKind, span: Range<usize>| {
            let slice = split.input[span.clone()].to_string();
            let error = ParseError {
                kind,
                position,
                span,
                slice,
            };
            tracing::debug!("recovering from {}", error);
            errors.push(error);
        };

        let operator = self.normalizer.normalize(split.operator);
        if operator.is_none() {
            error(ParseErrorKind::UnknownComparison, split.operator_span.clone());
        }

        let target = if right == Target::QUERY_MARKER {
            Some(Target::Query)
        } else {
            match self.evaluator.evaluate(right) {
                Ok(value) => Some(Target::Value(value)),
                Err(why) => {
                    error(ParseErrorKind::InvalidTarget(why), split.right_span.clone());
                    None
                }
            }
        };

        Some(Comparison::new(operator?, target?))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
struct Split<'a> {
    input: &'a str,
    left: &'a str,
    operator: &'a str,
    right: &'a str,
    operator_span: Range<usize>,
    right_span: Range<usize>,
}

fn is_comparison_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=')
}

/// Splits `input` around its first run of comparison characters.
fn split_comparison(input: &str) -> Split<'_> {
    let start = input.find(is_comparison_char).unwrap_or(input.len());
    let end = input[start..]
        .find(|c: char| !is_comparison_char(c))
        .map_or(input.len(), |len| start + len);

    Split {
        input,
        left: &input[..start],
        operator: &input[start..end],
        right: &input[end..],
        operator_span: start..end,
        right_span: end..input.len(),
    }
}

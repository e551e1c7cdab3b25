pub mod ast;
mod command;
mod error;
pub mod lexer;
mod parser;
pub mod visit;

pub use command::{CommandParser, Parsed};
pub use error::{ParseError, ParseErrorKind, ParseErrors};

/// Parses `s` with the default collaborators, always producing a tree.
pub fn parse(s: &str) -> Parsed {
    CommandParser::new().parse(s)
}

/// Parses `s` with the default collaborators, failing on any error.
pub fn parse_strict(s: &str) -> Result<ast::Command, ParseErrors> {
    CommandParser::new().parse_strict(s)
}

//! Pest parser shared by the category and AUTO grammars.

use pest::error::Error;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
pub(crate) struct CcgParser;

/// Flattens a pest error into a one-line message with its column.
pub(crate) fn describe(error: &Error<Rule>) -> String {
    let column = match error.line_col {
        pest::error::LineColLocation::Pos((_, col)) => col,
        pest::error::LineColLocation::Span((_, col), _) => col,
    };
    format!("{} at column {}", error.variant.message(), column)
}

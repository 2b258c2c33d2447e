//! Syntax module for ccg-reader
//!
//! Grammar-driven parsing of the small languages embedded in treebank files:
//! category labels and single-line AUTO derivations.

pub mod auto;
pub mod category;
pub(crate) mod parser;

pub use auto::parse_single_line;
pub use category::{Category, Slash};

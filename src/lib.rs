//! Readers for CCG derivation treebanks.
//!
//! Four serializations decode into one model: AUTO lines, PTB-style bracket
//! lines, C&C XML and Jigg XML. Every reader yields a lazy sequence of
//! [`Derivation`]s, each holding a name, the sentence tokens and a
//! [`Tree`] whose terminals point into those tokens.
//!
//! ```no_run
//! use std::path::Path;
//! use ccg_reader::{open, Format, Language};
//!
//! for derivation in open(Path::new("wsj_0001.auto"), Format::Auto, Language::En)? {
//!     let derivation = derivation?;
//!     println!("{}\n{}", derivation.name, derivation.tree.pretty());
//! }
//! # Ok::<(), ccg_reader::ReaderError>(())
//! ```

pub use crate::ast::{Combinator, Derivation, Language, Token, Tree, TreeBuilder};
pub use crate::errors::{ErrorType, ReaderError, ReaderResult};
pub use crate::readers::{open, open_guessing_format, read_str, Derivations, Format};
pub use crate::syntax::{parse_single_line, Category, Slash};

pub mod ast;
pub mod cli;
pub mod errors;
pub mod readers;
pub mod syntax;

//! Defines the command-line arguments and subcommands for the ccg-reader CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::ast::Language;
use crate::readers::Format;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "ccg-reader",
    version,
    about = "Read CCG derivation treebanks (AUTO, PTB, C&C XML, Jigg XML)."
)]
pub struct CcgArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every derivation as an indented tree.
    Show(InputArgs),
    /// Print every derivation as one JSON object per line.
    Json(InputArgs),
    /// Decode a file or every treebank file under a directory and report failures.
    Check(InputArgs),
}

/// Input selection shared by all subcommands.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Treebank file, or a directory for `check`.
    #[arg(required = true)]
    pub path: PathBuf,

    /// Input format: auto, ptb, xml or jigg. Inferred from the file suffix when omitted.
    #[arg(long)]
    pub format: Option<Format>,

    /// Treebank language: en or ja.
    #[arg(long = "lang", default_value = "en")]
    pub language: Language,
}

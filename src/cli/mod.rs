//! The ccg-reader Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::debug;
use walkdir::WalkDir;

use crate::cli::args::{CcgArgs, Command, InputArgs};
use crate::errors::{print_error, ReaderError, ReaderResult};
use crate::readers::{self, Derivations};

pub mod args;
pub mod output;

/// File suffixes `check` picks up when walking a directory without `--format`.
const TREEBANK_SUFFIXES: [&str; 3] = [".auto", ".ptb", ".xml"];

/// The main entry point for the CLI.
pub fn run() {
    let args = CcgArgs::parse();

    let result = match args.command {
        Command::Show(input) => handle_show(&input).map(|()| true),
        Command::Json(input) => handle_json(&input).map(|()| true),
        Command::Check(input) => handle_check(&input),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    }
}

fn open_input(path: &Path, input: &InputArgs) -> ReaderResult<Derivations> {
    match input.format {
        Some(format) => readers::open(path, format, input.language),
        None => readers::open_guessing_format(path, input.language),
    }
}

/// Handles the `show` subcommand.
fn handle_show(input: &InputArgs) -> ReaderResult<()> {
    let mut stdout = output::stdout_stream();
    for derivation in open_input(&input.path, input)? {
        output::write_derivation(&mut stdout, &derivation?)?;
    }
    Ok(())
}

/// Handles the `json` subcommand.
fn handle_json(input: &InputArgs) -> ReaderResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for derivation in open_input(&input.path, input)? {
        output::write_json_line(&mut out, &derivation?)?;
    }
    out.flush()?;
    Ok(())
}

/// Handles the `check` subcommand. Returns whether every file decoded cleanly.
fn handle_check(input: &InputArgs) -> ReaderResult<bool> {
    let mut stdout = output::stdout_stream();
    let files = input_files(&input.path, input.format.is_some())?;
    let mut derivations = 0;
    let mut failures = 0;

    for path in &files {
        match check_file(path, input) {
            Ok(count) => {
                derivations += count;
                output::write_check_line(&mut stdout, path, Ok(count))?;
            }
            Err(e) => {
                failures += 1;
                output::write_check_line(&mut stdout, path, Err(()))?;
                print_error(e);
            }
        }
    }
    output::write_summary(&mut stdout, files.len(), derivations, failures)?;
    Ok(failures == 0)
}

/// Decodes every derivation of one file and validates its token alignment.
fn check_file(path: &Path, input: &InputArgs) -> ReaderResult<usize> {
    let mut count = 0;
    for derivation in open_input(path, input)? {
        derivation?.check()?;
        count += 1;
    }
    debug!(path = %path.display(), count, "file checked");
    Ok(count)
}

/// A single file as given, or the treebank files under a directory in name
/// order. With an explicit format every regular file is taken.
fn input_files(path: &Path, any_file: bool) -> ReaderResult<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| ReaderError::from(io::Error::from(e)))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let wanted = any_file || {
            let name = entry.file_name().to_string_lossy();
            TREEBANK_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
        };
        if wanted {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_directory_walk_filters_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.ptb"), "").unwrap();
        fs::write(dir.path().join("a.auto"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.jigg.xml"), "").unwrap();

        let names: Vec<_> = input_files(dir.path(), false)
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.auto", "b.ptb", "c.jigg.xml"]);

        assert_eq!(input_files(dir.path(), true).unwrap().len(), 4);
    }

    #[test]
    fn test_single_file_is_taken_as_is() {
        let files = input_files(Path::new("whatever.txt"), false).unwrap();
        assert_eq!(files, vec![PathBuf::from("whatever.txt")]);
    }
}

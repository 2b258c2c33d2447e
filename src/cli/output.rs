//! Handles all user-facing output for the CLI.
//!
//! Tree rendering, JSON lines and check reports all go through here so the
//! subcommands only decide *what* to print.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ast::Derivation;

/// Stdout stream that only colors when attached to a terminal.
pub fn stdout_stream() -> StandardStream {
    let choice = if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Writes a colored header line followed by the indented tree.
pub fn write_derivation<W: WriteColor>(out: &mut W, derivation: &Derivation) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    write!(out, "# {}", derivation.name)?;
    out.reset()?;
    writeln!(out, " ({} tokens)", derivation.tokens.len())?;
    write!(out, "{}", derivation.tree.pretty())?;
    writeln!(out)
}

/// Writes the derivation as a single JSON line.
pub fn write_json_line<W: Write>(out: &mut W, derivation: &Derivation) -> io::Result<()> {
    serde_json::to_writer(&mut *out, derivation)?;
    writeln!(out)
}

/// One line per checked file: `ok` with a count, or `FAILED`.
pub fn write_check_line<W: WriteColor>(
    out: &mut W,
    path: &Path,
    outcome: Result<usize, ()>,
) -> io::Result<()> {
    match outcome {
        Ok(count) => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "ok")?;
            out.reset()?;
            writeln!(out, "     {} ({} derivations)", path.display(), count)
        }
        Err(()) => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "FAILED")?;
            out.reset()?;
            writeln!(out, " {}", path.display())
        }
    }
}

pub fn write_summary<W: WriteColor>(
    out: &mut W,
    files: usize,
    derivations: usize,
    failures: usize,
) -> io::Result<()> {
    let color = if failures == 0 { Color::Green } else { Color::Red };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    writeln!(
        out,
        "checked {} file(s), {} derivation(s), {} failure(s)",
        files, derivations, failures
    )?;
    out.reset()
}

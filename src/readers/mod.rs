//! Treebank readers.
//!
//! Each reader turns one serialization into a lazy sequence of
//! [`Derivation`]s. The format is an explicit [`Format`] value chosen by the
//! caller; [`Format::from_path`] infers it from a file name for entry points
//! such as the command line.
//!
//! | suffix      | format               |
//! |-------------|----------------------|
//! | `.jigg.xml` | [`Format::JiggXml`]  |
//! | `.xml`      | [`Format::CandcXml`] |
//! | `.ptb`      | [`Format::Ptb`]      |
//! | otherwise   | [`Format::Auto`]     |

use std::fmt;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::ast::{Derivation, Language};
use crate::errors::ReaderResult;
use crate::syntax::auto::parse_single_line;

pub mod candc;
pub mod jigg;
pub mod lines;
pub mod markup;
pub mod ptb;

use lines::{LineDerivations, LineParser};
use markup::Element;

// ============================================================================
// FORMATS
// ============================================================================

/// Supported treebank serializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// CCGbank AUTO, one derivation per line
    Auto,
    /// Bracketed `(ROOT ...)` trees, one per line
    Ptb,
    /// C&C XML with `<rule>` and `<lf>` elements
    CandcXml,
    /// Jigg XML with span graphs and token tables
    JiggXml,
}

impl Format {
    /// Infers the format from a file name. Unknown suffixes read as AUTO.
    pub fn from_path(path: &Path) -> Format {
        let name = path.to_string_lossy();
        if name.ends_with(".jigg.xml") {
            Format::JiggXml
        } else if name.ends_with(".xml") {
            Format::CandcXml
        } else if name.ends_with(".ptb") {
            Format::Ptb
        } else {
            Format::Auto
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Auto => "auto",
            Format::Ptb => "ptb",
            Format::CandcXml => "xml",
            Format::JiggXml => "jigg",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Format::Auto),
            "ptb" => Ok(Format::Ptb),
            "xml" | "candc" => Ok(Format::CandcXml),
            "jigg" => Ok(Format::JiggXml),
            other => Err(format!(
                "unknown format '{}' (expected auto, ptb, xml or jigg)",
                other
            )),
        }
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Lazy, finite, non-restartable sequence of decoded derivations. After the
/// first error the sequence ends.
pub type Derivations = Box<dyn Iterator<Item = ReaderResult<Derivation>> + Send>;

/// Opens `path` and decodes it as `format`.
pub fn open(path: &Path, format: Format, language: Language) -> ReaderResult<Derivations> {
    info!(path = %path.display(), %format, %language, "reading trees");
    match format {
        Format::Auto | Format::Ptb => {
            let reader = BufReader::new(File::open(path)?);
            Ok(from_lines(reader, line_parser(format), language))
        }
        Format::CandcXml | Format::JiggXml => {
            let text = fs::read_to_string(path)?;
            from_markup(&text, format, language)
        }
    }
}

/// Opens `path`, choosing the format from its suffix.
pub fn open_guessing_format(path: &Path, language: Language) -> ReaderResult<Derivations> {
    open(path, Format::from_path(path), language)
}

/// Decodes in-memory text as `format`.
pub fn read_str(text: &str, format: Format, language: Language) -> ReaderResult<Derivations> {
    match format {
        Format::Auto | Format::Ptb => Ok(from_lines(
            Cursor::new(text.to_string()),
            line_parser(format),
            language,
        )),
        Format::CandcXml | Format::JiggXml => from_markup(text, format, language),
    }
}

// ============================================================================
// INTERNALS
// ============================================================================

fn line_parser(format: Format) -> LineParser {
    match format {
        Format::Ptb => ptb::parse_ptb,
        _ => parse_single_line,
    }
}

fn from_lines<R>(reader: R, parse: LineParser, language: Language) -> Derivations
where
    R: BufRead + Send + 'static,
{
    Box::new(StopOnError::new(LineDerivations::new(reader, parse, language)))
}

fn from_markup(text: &str, format: Format, language: Language) -> ReaderResult<Derivations> {
    let root = Element::parse_document(text)?;
    let derivations: Derivations = match format {
        Format::JiggXml => Box::new(StopOnError::new(jigg::derivations(root, language))),
        _ => Box::new(StopOnError::new(candc::derivations(root, language))),
    };
    Ok(derivations)
}

/// Ends the sequence after yielding the first error.
struct StopOnError<I> {
    inner: I,
    failed: bool,
}

impl<I> StopOnError<I> {
    fn new(inner: I) -> Self {
        StopOnError {
            inner,
            failed: false,
        }
    }
}

impl<I> Iterator for StopOnError<I>
where
    I: Iterator<Item = ReaderResult<Derivation>>,
{
    type Item = ReaderResult<Derivation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.inner.next()? {
            Ok(derivation) => {
                debug!(name = %derivation.name, tokens = derivation.tokens.len(), "decoded derivation");
                Some(Ok(derivation))
            }
            Err(e) => {
                warn!(error = %e, "derivation failed, stopping");
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

//! Reader error handling
//!
//! Every decoder reports failures through [`ReaderError`]. The variants follow
//! the failure taxonomy of the readers:
//!
//! - malformed category text,
//! - structural shape errors (child counts, unresolved bracket stacks, missing attributes),
//! - missing surface forms in span-graph token tables,
//! - input failures (XML well-formedness, I/O).
//!
//! Errors are never recovered inside a derivation. A failed derivation ends the
//! whole decode pass and the caller decides whether to skip the file.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

/// Type-safe error classification for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Category text could not be parsed
    Category,
    /// The derivation does not have a valid tree shape
    Parse,
    /// The input could not be read or is not well-formed markup
    Input,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Category => "Category",
            ErrorType::Parse => "Parse",
            ErrorType::Input => "Input",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Unified error type for all reader failure modes.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Category error{}: cannot parse '{text}': {message}", in_name(.derivation))]
    Category {
        text: String,
        message: String,
        derivation: Option<String>,
    },
    #[error("Parse error{}: {message}", in_name(.derivation))]
    Structure {
        message: String,
        derivation: Option<String>,
    },
    #[error(
        "Parse error{}: token '{token_id}' has neither a 'word' nor a 'surf' attribute",
        in_name(.derivation)
    )]
    MissingSurface {
        token_id: String,
        derivation: Option<String>,
    },
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn in_name(derivation: &Option<String>) -> String {
    match derivation {
        Some(name) => format!(" in derivation '{}'", name),
        None => String::new(),
    }
}

pub type ReaderResult<T> = Result<T, ReaderError>;

impl ReaderError {
    /// Malformed category text.
    pub fn category(text: impl Into<String>, message: impl Into<String>) -> Self {
        ReaderError::Category {
            text: text.into(),
            message: message.into(),
            derivation: None,
        }
    }

    /// Structural shape error: wrong child count, unresolved stack, missing attribute.
    pub fn structure(message: impl Into<String>) -> Self {
        ReaderError::Structure {
            message: message.into(),
            derivation: None,
        }
    }

    /// A span-graph leaf points at a token without a surface form.
    pub fn missing_surface(token_id: impl Into<String>) -> Self {
        ReaderError::MissingSurface {
            token_id: token_id.into(),
            derivation: None,
        }
    }

    /// Attaches the derivation name, unless one is already recorded.
    pub fn in_derivation(mut self, name: &str) -> Self {
        match &mut self {
            ReaderError::Category { derivation, .. }
            | ReaderError::Structure { derivation, .. }
            | ReaderError::MissingSurface { derivation, .. } => {
                if derivation.is_none() {
                    *derivation = Some(name.to_string());
                }
            }
            ReaderError::Xml(_) | ReaderError::Io(_) => {}
        }
        self
    }

    /// Name of the derivation that failed, when known.
    pub fn derivation(&self) -> Option<&str> {
        match self {
            ReaderError::Category { derivation, .. }
            | ReaderError::Structure { derivation, .. }
            | ReaderError::MissingSurface { derivation, .. } => derivation.as_deref(),
            ReaderError::Xml(_) | ReaderError::Io(_) => None,
        }
    }

    pub fn error_type(&self) -> ErrorType {
        match self {
            ReaderError::Category { .. } => ErrorType::Category,
            ReaderError::Structure { .. } | ReaderError::MissingSurface { .. } => ErrorType::Parse,
            ReaderError::Xml(_) | ReaderError::Io(_) => ErrorType::Input,
        }
    }

    /// Stable diagnostic code, e.g. `ccg::parse::structure`.
    pub const fn code_str(&self) -> &'static str {
        match self {
            ReaderError::Category { .. } => "ccg::category::malformed",
            ReaderError::Structure { .. } => "ccg::parse::structure",
            ReaderError::MissingSurface { .. } => "ccg::parse::missing_surface",
            ReaderError::Xml(_) => "ccg::input::xml",
            ReaderError::Io(_) => "ccg::input::io",
        }
    }

    fn help_text(&self) -> Option<&'static str> {
        match self {
            ReaderError::Category { .. } => Some(
                "categories are atoms like NP or S[dcl], or functors joined by '/', '\\' or '|'",
            ),
            ReaderError::Structure { .. } => {
                Some("unary nodes take exactly one child and binary nodes exactly two")
            }
            ReaderError::MissingSurface { .. } => {
                Some("token elements must carry the surface form in 'word' or 'surf'")
            }
            ReaderError::Xml(_) => None,
            ReaderError::Io(_) => Some("check that the file exists and is readable"),
        }
    }
}

impl Diagnostic for ReaderError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_text()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a ReaderError with full miette diagnostics on stderr.
pub fn print_error(error: ReaderError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}

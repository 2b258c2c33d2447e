//! CCG category labels.
//!
//! A category is either atomic (`NP`, `S[dcl]`, `conj`) or a functor built from
//! a result, a slash and an argument (`S\NP`, `(S\NP)/NP`). Slashes associate
//! to the left, so `S\NP/NP` reads as `(S\NP)/NP`.

use std::fmt;

use pest::iterators::Pair;
use pest::Parser;
use serde::{Serialize, Serializer};

use crate::errors::{ReaderError, ReaderResult};
use crate::syntax::parser::{describe, CcgParser, Rule};

/// Direction of a functor's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slash {
    /// `/`: argument to the right
    Forward,
    /// `\`: argument to the left
    Backward,
    /// `|`: either direction
    Either,
}

impl Slash {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slash::Forward => "/",
            Slash::Backward => "\\",
            Slash::Either => "|",
        }
    }

    fn from_symbol(text: &str) -> Option<Slash> {
        match text {
            "/" => Some(Slash::Forward),
            "\\" => Some(Slash::Backward),
            "|" => Some(Slash::Either),
            _ => None,
        }
    }

    /// `|` matches any direction.
    pub fn matches(&self, other: Slash) -> bool {
        *self == Slash::Either || other == Slash::Either || *self == other
    }
}

impl fmt::Display for Slash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed category label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Atomic {
        base: String,
        feature: Option<String>,
    },
    Functor {
        result: Box<Category>,
        slash: Slash,
        argument: Box<Category>,
    },
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Category {
    pub fn atomic(base: impl Into<String>) -> Self {
        Category::Atomic {
            base: base.into(),
            feature: None,
        }
    }

    pub fn with_feature(base: impl Into<String>, feature: impl Into<String>) -> Self {
        Category::Atomic {
            base: base.into(),
            feature: Some(feature.into()),
        }
    }

    pub fn functor(result: Category, slash: Slash, argument: Category) -> Self {
        Category::Functor {
            result: Box::new(result),
            slash,
            argument: Box::new(argument),
        }
    }

    /// Parses category text. Fails with a category error on malformed input.
    pub fn parse(text: &str) -> ReaderResult<Category> {
        let mut pairs = CcgParser::parse(Rule::category, text)
            .map_err(|e| ReaderError::category(text, describe(&e)))?;
        let chain = pairs
            .next()
            .and_then(|category| category.into_inner().next())
            .ok_or_else(|| ReaderError::category(text, "empty category"))?;
        build_chain(chain, text)
    }

    pub fn is_functor(&self) -> bool {
        matches!(self, Category::Functor { .. })
    }

    pub fn result(&self) -> Option<&Category> {
        match self {
            Category::Functor { result, .. } => Some(result),
            Category::Atomic { .. } => None,
        }
    }

    pub fn argument(&self) -> Option<&Category> {
        match self {
            Category::Functor { argument, .. } => Some(argument),
            Category::Atomic { .. } => None,
        }
    }

    pub fn slash(&self) -> Option<Slash> {
        match self {
            Category::Functor { slash, .. } => Some(*slash),
            Category::Atomic { .. } => None,
        }
    }

    /// Number of arguments taken before reaching an atomic result.
    pub fn n_args(&self) -> usize {
        let mut count = 0;
        let mut current = self;
        while let Category::Functor { result, .. } = current {
            count += 1;
            current = result;
        }
        count
    }

    /// The same category with every feature removed: `S[dcl]\NP[nb]` becomes `S\NP`.
    pub fn without_features(&self) -> Category {
        match self {
            Category::Atomic { base, .. } => Category::atomic(base.clone()),
            Category::Functor {
                result,
                slash,
                argument,
            } => Category::functor(result.without_features(), *slash, argument.without_features()),
        }
    }

    fn fmt_bracketed(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_functor() {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Atomic {
                base,
                feature: Some(feature),
            } => write!(f, "{}[{}]", base, feature),
            Category::Atomic { base, feature: None } => f.write_str(base),
            Category::Functor {
                result,
                slash,
                argument,
            } => {
                result.fmt_bracketed(f)?;
                f.write_str(slash.as_str())?;
                argument.fmt_bracketed(f)
            }
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// PAIR CONVERSION
// ============================================================================

fn build_chain(pair: Pair<Rule>, text: &str) -> ReaderResult<Category> {
    let mut inner = pair.into_inner();
    let first = inner
        .next()
        .ok_or_else(|| ReaderError::category(text, "empty category"))?;
    let mut category = build_operand(first, text)?;

    while let Some(slash_pair) = inner.next() {
        let slash = Slash::from_symbol(slash_pair.as_str())
            .ok_or_else(|| ReaderError::category(text, "unknown slash"))?;
        let operand = inner
            .next()
            .ok_or_else(|| ReaderError::category(text, "missing argument after slash"))?;
        category = Category::functor(category, slash, build_operand(operand, text)?);
    }
    Ok(category)
}

fn build_operand(pair: Pair<Rule>, text: &str) -> ReaderResult<Category> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ReaderError::category(text, "empty operand"))?;
    match inner.as_rule() {
        Rule::cat_chain => build_chain(inner, text),
        Rule::atom => {
            let mut parts = inner.into_inner();
            let base = parts
                .next()
                .map(|p| p.as_str().to_string())
                .ok_or_else(|| ReaderError::category(text, "missing atom"))?;
            let feature = parts
                .next()
                .and_then(|f| f.into_inner().next())
                .map(|body| body.as_str().to_string());
            Ok(Category::Atomic { base, feature })
        }
        rule => Err(ReaderError::category(
            text,
            format!("unexpected rule {:?}", rule),
        )),
    }
}

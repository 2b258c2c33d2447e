//! AST module for ccg-reader
//!
//! The canonical model every reader produces: derivation trees over
//! categories, the token sequence of each sentence, and the `Derivation`
//! triple handed to callers. Downstream tools depend only on these types,
//! never on the serialization a tree was read from.

// ============================================================================
// IMPORTS
// ============================================================================

use std::fmt;
use std::mem;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ReaderError, ReaderResult};
use crate::syntax::Category;

pub mod builder;
pub mod combinator;
pub mod token;

pub use builder::TreeBuilder;
pub use combinator::Combinator;
pub use token::Token;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Language of a treebank. Threaded through the readers for downstream
/// category semantics; decoding itself does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ja" => Ok(Language::Ja),
            other => Err(format!("unknown language '{}' (expected en or ja)", other)),
        }
    }
}

/// A derivation tree.
///
/// Unary and binary nodes own their children, so a node with the wrong
/// number of children cannot be represented. Equality, rendering and drop
/// walk the tree with an explicit stack, so depth is bounded by the heap.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Tree {
    Terminal {
        category: Category,
        word: String,
        position: usize,
    },
    Unary {
        category: Category,
        child: Box<Tree>,
    },
    Binary {
        category: Category,
        head_is_left: bool,
        left: Box<Tree>,
        right: Box<Tree>,
        combinator: Combinator,
    },
}

/// One decoded derivation: its name, the sentence tokens and the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derivation {
    pub name: String,
    pub tokens: Vec<Token>,
    pub tree: Tree,
    pub language: Language,
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Tree {
    pub fn category(&self) -> &Category {
        match self {
            Tree::Terminal { category, .. }
            | Tree::Unary { category, .. }
            | Tree::Binary { category, .. } => category,
        }
    }

    /// Children in left-to-right order.
    pub fn children(&self) -> Vec<&Tree> {
        match self {
            Tree::Terminal { .. } => vec![],
            Tree::Unary { child, .. } => vec![child.as_ref()],
            Tree::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Tree::Terminal { .. })
    }

    /// Terminal nodes in left-to-right order.
    pub fn leaves(&self) -> Vec<&Tree> {
        let mut leaves = Vec::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Tree::Terminal { .. } => leaves.push(node),
                Tree::Unary { child, .. } => pending.push(child),
                Tree::Binary { left, right, .. } => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }
        leaves
    }

    /// `(position, word)` of every terminal, in left-to-right order.
    pub fn word_positions(&self) -> Vec<(usize, &str)> {
        self.leaves()
            .into_iter()
            .filter_map(|leaf| match leaf {
                Tree::Terminal { word, position, .. } => Some((*position, word.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Indented one-node-per-line rendering.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            let indent = "  ".repeat(depth);
            match node {
                Tree::Terminal {
                    category,
                    word,
                    position,
                } => {
                    out.push_str(&format!("{}{} {} @{}\n", indent, category, word, position));
                }
                Tree::Unary { category, child } => {
                    out.push_str(&format!("{}{}\n", indent, category));
                    pending.push((child.as_ref(), depth + 1));
                }
                Tree::Binary {
                    category,
                    left,
                    right,
                    combinator,
                    ..
                } => {
                    out.push_str(&format!("{}{} {}\n", indent, category, combinator));
                    pending.push((right.as_ref(), depth + 1));
                    pending.push((left.as_ref(), depth + 1));
                }
            }
        }
        out
    }

    /// Moves non-terminal children onto `pending`, leaving empty leaves behind.
    fn detach_children(&mut self, pending: &mut Vec<Tree>) {
        match self {
            Tree::Terminal { .. } => {}
            Tree::Unary { child, .. } => detach(child, pending),
            Tree::Binary { left, right, .. } => {
                detach(left, pending);
                detach(right, pending);
            }
        }
    }
}

fn detach(slot: &mut Tree, pending: &mut Vec<Tree>) {
    if !slot.is_terminal() {
        let empty = Tree::Terminal {
            category: Category::atomic(String::new()),
            word: String::new(),
            position: 0,
        };
        pending.push(mem::replace(slot, empty));
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (
                    Tree::Terminal {
                        category: c1,
                        word: w1,
                        position: p1,
                    },
                    Tree::Terminal {
                        category: c2,
                        word: w2,
                        position: p2,
                    },
                ) => {
                    if c1 != c2 || w1 != w2 || p1 != p2 {
                        return false;
                    }
                }
                (
                    Tree::Unary {
                        category: c1,
                        child: x1,
                    },
                    Tree::Unary {
                        category: c2,
                        child: x2,
                    },
                ) => {
                    if c1 != c2 {
                        return false;
                    }
                    pending.push((x1.as_ref(), x2.as_ref()));
                }
                (
                    Tree::Binary {
                        category: c1,
                        head_is_left: h1,
                        left: l1,
                        right: r1,
                        combinator: k1,
                    },
                    Tree::Binary {
                        category: c2,
                        head_is_left: h2,
                        left: l2,
                        right: r2,
                        combinator: k2,
                    },
                ) => {
                    if c1 != c2 || h1 != h2 || k1 != k2 {
                        return false;
                    }
                    pending.push((r1.as_ref(), r2.as_ref()));
                    pending.push((l1.as_ref(), l2.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Derivation {
    /// Verifies that there is one token per terminal and that terminal
    /// positions run `0..N` in left-to-right order.
    pub fn check(&self) -> ReaderResult<()> {
        let positions = self.tree.word_positions();
        if positions.len() != self.tokens.len() {
            return Err(ReaderError::structure(format!(
                "{} tokens for {} terminals",
                self.tokens.len(),
                positions.len()
            ))
            .in_derivation(&self.name));
        }
        for (expected, (position, word)) in positions.into_iter().enumerate() {
            if position != expected {
                return Err(ReaderError::structure(format!(
                    "terminal '{}' has position {}, expected {}",
                    word, position, expected
                ))
                .in_derivation(&self.name));
            }
        }
        Ok(())
    }
}

//! Jigg XML derivations.
//!
//! ```text
//! <sentence id="s0">
//!   <tokens>
//!     <token id="t0_0" surf="John" pos="NNP"/>
//!     <token id="t0_1" surf="runs" pos="VBZ"/>
//!   </tokens>
//!   <ccg id="s0_ccg0" root="s0_sp0">
//!     <span id="s0_sp0" category="S[dcl]" child="s0_sp1 s0_sp2" rule="&lt;"/>
//!     <span id="s0_sp1" category="NP" terminal="t0_0"/>
//!     <span id="s0_sp2" category="S[dcl]\NP" terminal="t0_1"/>
//!   </ccg>
//! </sentence>
//! ```
//!
//! Spans reference their children by id and leaves reference a token by id,
//! so the tree is rebuilt by following those links from the `root` span.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::ast::{Derivation, Language, Token, Tree, TreeBuilder};
use crate::errors::{ReaderError, ReaderResult};
use crate::readers::markup::Element;
use crate::syntax::Category;

/// Attributes that may hold a token's surface form, tried in this order.
pub const SURFACE_ATTRIBUTES: [&str; 2] = ["word", "surf"];

/// Token elements of one sentence, keyed by id.
pub type TokenTable = HashMap<String, Element>;

/// Lazily decodes every `<ccg>` element of every `<sentence>` under `root`.
pub fn derivations(
    root: Element,
    language: Language,
) -> impl Iterator<Item = ReaderResult<Derivation>> + Send {
    let mut pending = Vec::new();
    for sentence in root.descendants_named("sentence") {
        let table: TokenTable = sentence
            .descendants_named("token")
            .into_iter()
            .filter_map(|token| token.attr("id").map(|id| (id.to_string(), token.clone())))
            .collect();
        let table = Arc::new(table);
        for ccg in sentence.children_named("ccg") {
            pending.push((Arc::clone(&table), ccg.clone()));
        }
    }
    pending
        .into_iter()
        .map(move |(table, ccg)| decode(&ccg, &table, language))
}

fn decode(ccg: &Element, table: &TokenTable, language: Language) -> ReaderResult<Derivation> {
    let name = ccg.required("id")?.to_string();
    parse_ccg(ccg, table, language)
        .map(|(tree, tokens)| TreeBuilder::new(language).derivation(name.clone(), tokens, tree))
        .map_err(|e| e.in_derivation(&name))
}

/// Surface form of a token element, from the first of
/// [`SURFACE_ATTRIBUTES`] that is present.
pub fn surface<'a>(token: &'a Element, token_id: &str) -> ReaderResult<&'a str> {
    SURFACE_ATTRIBUTES
        .iter()
        .find_map(|name| token.attr(name))
        .ok_or_else(|| ReaderError::missing_surface(token_id))
}

struct SpanGraph<'a> {
    spans: HashMap<&'a str, &'a Element>,
    table: &'a TokenTable,
    visited: HashSet<&'a str>,
    tokens: Vec<Token>,
    builder: TreeBuilder,
}

/// An internal span whose children are still being decoded.
struct Frame<'a> {
    category: Category,
    child_ids: Vec<&'a str>,
    children: Vec<Tree>,
}

impl<'a> SpanGraph<'a> {
    /// Follows span links depth-first from `root` with an explicit stack of
    /// open spans.
    fn build(&mut self, root: &'a str) -> ReaderResult<Tree> {
        let mut open: Vec<Frame<'a>> = Vec::new();
        let mut id = root;
        loop {
            let span = self.enter(id)?;
            let category = Category::parse(span.required("category")?)?;

            let mut tree = if let Some(child_ids) = span.attr("child") {
                let child_ids: Vec<&'a str> = child_ids.split_whitespace().collect();
                match child_ids.first().copied() {
                    Some(first) => {
                        open.push(Frame {
                            category,
                            child_ids,
                            children: Vec::new(),
                        });
                        id = first;
                        continue;
                    }
                    None => self.builder.from_children(category, Vec::new(), true)?,
                }
            } else if let Some(token_id) = span.attr("terminal") {
                self.leaf(id, token_id, category)?
            } else {
                return Err(ReaderError::structure(format!(
                    "span '{}' has neither 'child' nor 'terminal'",
                    id
                )));
            };

            // Close every span whose children are all decoded.
            loop {
                let Some(mut frame) = open.pop() else {
                    return Ok(tree);
                };
                frame.children.push(tree);
                if let Some(&next) = frame.child_ids.get(frame.children.len()) {
                    id = next;
                    open.push(frame);
                    break;
                }
                tree = self
                    .builder
                    .from_children(frame.category, frame.children, true)?;
            }
        }
    }

    /// Looks up a span, rejecting ids that were already reached.
    fn enter(&mut self, id: &'a str) -> ReaderResult<&'a Element> {
        let span = *self
            .spans
            .get(id)
            .ok_or_else(|| ReaderError::structure(format!("unknown span '{}'", id)))?;
        if !self.visited.insert(id) {
            return Err(ReaderError::structure(format!(
                "span '{}' is referenced more than once",
                id
            )));
        }
        Ok(span)
    }

    fn leaf(&mut self, id: &str, token_id: &str, category: Category) -> ReaderResult<Tree> {
        let table = self.table;
        let token = table.get(token_id).ok_or_else(|| {
            ReaderError::structure(format!("span '{}' points at unknown token '{}'", id, token_id))
        })?;
        let word = surface(token, token_id)?;
        let position = self.tokens.len();
        self.tokens.push(
            Token::new(word)
                .with_pos(token.attr("pos"))
                .with_entity(token.attr("entity"))
                .with_lemma(token.attr("lemma").or_else(|| token.attr("base")))
                .with_chunk(token.attr("chunk")),
        );
        Ok(self.builder.terminal(word, category, position))
    }
}

/// Decodes the tree under one `<ccg>` element. The token sequence holds the
/// tokens of the leaves, left to right.
pub fn parse_ccg(
    ccg: &Element,
    table: &TokenTable,
    language: Language,
) -> ReaderResult<(Tree, Vec<Token>)> {
    let mut spans = HashMap::new();
    for span in ccg.children_named("span") {
        let id = span.required("id")?;
        if spans.insert(id, span).is_some() {
            return Err(ReaderError::structure(format!(
                "span id '{}' is used more than once",
                id
            )));
        }
    }
    let mut graph = SpanGraph {
        spans,
        table,
        visited: HashSet::new(),
        tokens: Vec::new(),
        builder: TreeBuilder::new(language),
    };
    let tree = graph.build(ccg.required("root")?)?;
    Ok((tree, graph.tokens))
}

//! C&C XML derivations.
//!
//! ```text
//! <candc>
//!   <ccg sentence="1" id="1">
//!     <rule type="ba" cat="S[dcl]">
//!       <lf start="0" span="1" word="John" lemma="John" pos="NNP" chunk="I-NP" entity="I-PER" cat="NP"/>
//!       <lf start="1" span="1" word="runs" lemma="run" pos="VBZ" chunk="I-VP" entity="O" cat="S[dcl]\NP"/>
//!     </rule>
//!   </ccg>
//! </candc>
//! ```
//!
//! The tree mirrors the element nesting. Each `<ccg>` child of the document
//! root is one derivation.

use crate::ast::{Derivation, Language, Token, Tree, TreeBuilder};
use crate::errors::{ReaderError, ReaderResult};
use crate::readers::markup::Element;
use crate::syntax::Category;

const DERIVATION_TAG: &str = "ccg";
const RULE_TAG: &str = "rule";
const LEAF_TAGS: [&str; 2] = ["lf", "leaf"];

/// Lazily decodes every `<ccg>` element under `root`.
pub fn derivations(
    root: Element,
    language: Language,
) -> impl Iterator<Item = ReaderResult<Derivation>> + Send {
    root.into_children()
        .into_iter()
        .filter(|child| child.name() == DERIVATION_TAG)
        .map(move |ccg| decode(&ccg, language))
}

/// `key=value` pairs of the element's attributes joined with `_`.
pub fn derivation_name(ccg: &Element) -> String {
    ccg.attributes()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("_")
}

fn decode(ccg: &Element, language: Language) -> ReaderResult<Derivation> {
    let name = derivation_name(ccg);
    parse_ccg(ccg, language)
        .map(|(tree, tokens)| TreeBuilder::new(language).derivation(name.clone(), tokens, tree))
        .map_err(|e| e.in_derivation(&name))
}

/// Decodes the tree under one `<ccg>` element.
pub fn parse_ccg(ccg: &Element, language: Language) -> ReaderResult<(Tree, Vec<Token>)> {
    let root = ccg
        .children()
        .first()
        .ok_or_else(|| ReaderError::structure("<ccg> element has no derivation"))?;
    let builder = TreeBuilder::new(language);
    let mut tokens = Vec::new();
    let tree = build(root, &builder, &mut tokens)?;
    Ok((tree, tokens))
}

/// A `<rule>` whose children are still being decoded.
struct Frame<'a> {
    node: &'a Element,
    category: Category,
    children: Vec<Tree>,
}

/// Decodes the element tree depth-first with an explicit stack of open rules.
fn build(root: &Element, builder: &TreeBuilder, tokens: &mut Vec<Token>) -> ReaderResult<Tree> {
    let mut open: Vec<Frame> = Vec::new();
    let mut node = root;
    loop {
        let category = Category::parse(node.required("cat")?)?;
        let mut tree = if node.name() == RULE_TAG {
            match node.children().first() {
                Some(first) => {
                    open.push(Frame {
                        node,
                        category,
                        children: Vec::new(),
                    });
                    node = first;
                    continue;
                }
                None => builder.from_children(category, Vec::new(), true)?,
            }
        } else if LEAF_TAGS.contains(&node.name()) {
            leaf(node, category, builder, tokens)?
        } else {
            return Err(ReaderError::structure(format!(
                "unexpected <{}> element in derivation",
                node.name()
            )));
        };

        // Close every rule whose children are all decoded.
        loop {
            let Some(mut frame) = open.pop() else {
                return Ok(tree);
            };
            frame.children.push(tree);
            if let Some(next) = frame.node.children().get(frame.children.len()) {
                node = next;
                open.push(frame);
                break;
            }
            tree = builder.from_children(frame.category, frame.children, true)?;
        }
    }
}

fn leaf(
    node: &Element,
    category: Category,
    builder: &TreeBuilder,
    tokens: &mut Vec<Token>,
) -> ReaderResult<Tree> {
    let word = node.required("word")?;
    let position = tokens.len();
    tokens.push(
        Token::new(word)
            .with_pos(node.attr("pos"))
            .with_entity(node.attr("entity"))
            .with_lemma(node.attr("lemma"))
            .with_chunk(node.attr("chunk")),
    );
    Ok(builder.terminal(word, category, position))
}

//! Single-line AUTO derivations.
//!
//! ```text
//! (<T S[dcl] 0 2> (<L NP NNP NNP John NP>) (<T S[dcl]\NP 0 1> (<L S[dcl]\NP VBZ VBZ runs S[dcl]\NP_1>) ) )
//! ```
//!
//! Internal nodes are `<T category head child_count>`, leaves are
//! `<L category modified_pos original_pos word predicate_argument_category>`.

use pest::iterators::Pair;
use pest::Parser;

use crate::ast::{Language, Token, Tree, TreeBuilder};
use crate::errors::{ReaderError, ReaderResult};
use crate::syntax::parser::{describe, CcgParser, Rule};
use crate::syntax::Category;

/// Parses one AUTO derivation into its tree and token sequence.
pub fn parse_single_line(text: &str, language: Language) -> ReaderResult<(Tree, Vec<Token>)> {
    let mut pairs = CcgParser::parse(Rule::auto_tree, text.trim()).map_err(|e| {
        ReaderError::structure(format!("malformed AUTO derivation: {}", describe(&e)))
    })?;
    let root = pairs
        .next()
        .and_then(|tree| tree.into_inner().next())
        .ok_or_else(|| ReaderError::structure("empty AUTO derivation"))?;

    let builder = TreeBuilder::new(language);
    let mut tokens = Vec::new();
    let tree = build_node(root, &builder, &mut tokens)?;
    Ok((tree, tokens))
}

fn build_node(pair: Pair<Rule>, builder: &TreeBuilder, tokens: &mut Vec<Token>) -> ReaderResult<Tree> {
    match pair.as_rule() {
        Rule::auto_internal => {
            let mut inner = pair.into_inner();
            let category = Category::parse(next_field(&mut inner, "category")?)?;
            let head = parse_count(next_field(&mut inner, "head index")?)?;
            let declared = parse_count(next_field(&mut inner, "child count")?)?;

            let children = inner
                .map(|child| build_node(child, builder, tokens))
                .collect::<ReaderResult<Vec<_>>>()?;
            if children.len() != declared {
                return Err(ReaderError::structure(format!(
                    "'{}' node declares {} children but has {}",
                    category,
                    declared,
                    children.len()
                )));
            }
            builder.from_children(category, children, head == 0)
        }
        Rule::auto_leaf => {
            let mut inner = pair.into_inner();
            let category = Category::parse(next_field(&mut inner, "category")?)?;
            let pos = next_field(&mut inner, "part-of-speech")?;
            let _original_pos = next_field(&mut inner, "original part-of-speech")?;
            let word = next_field(&mut inner, "word")?;

            let position = tokens.len();
            tokens.push(Token::new(word).with_pos(Some(pos)));
            Ok(builder.terminal(word, category, position))
        }
        rule => Err(ReaderError::structure(format!(
            "unexpected AUTO element {:?}",
            rule
        ))),
    }
}

fn next_field<'i>(
    inner: &mut pest::iterators::Pairs<'i, Rule>,
    what: &str,
) -> ReaderResult<&'i str> {
    inner
        .next()
        .map(|p| p.as_str())
        .ok_or_else(|| ReaderError::structure(format!("AUTO node is missing its {}", what)))
}

fn parse_count(text: &str) -> ReaderResult<usize> {
    text.parse::<usize>()
        .map_err(|_| ReaderError::structure(format!("expected a number, found '{}'", text)))
}

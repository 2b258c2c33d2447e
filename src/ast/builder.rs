//! # Tree Builder
//!
//! The only way readers construct derivation trees. `from_children` is the
//! shared shape check: one child makes a unary node, two make a binary node,
//! and any other count is a structural error.

use crate::ast::{Combinator, Derivation, Language, Token, Tree};
use crate::errors::{ReaderError, ReaderResult};
use crate::syntax::Category;

/// Constructs trees for one language.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    language: Language,
}

impl TreeBuilder {
    pub fn new(language: Language) -> Self {
        TreeBuilder { language }
    }

    /// Wraps a decoded tree and its tokens, tagged with this builder's language.
    pub fn derivation(&self, name: impl Into<String>, tokens: Vec<Token>, tree: Tree) -> Derivation {
        Derivation {
            name: name.into(),
            tokens,
            tree,
            language: self.language,
        }
    }

    pub fn terminal(&self, word: impl Into<String>, category: Category, position: usize) -> Tree {
        Tree::Terminal {
            category,
            word: word.into(),
            position,
        }
    }

    pub fn unary(&self, category: Category, child: Tree) -> Tree {
        Tree::Unary {
            category,
            child: Box::new(child),
        }
    }

    pub fn binary(
        &self,
        category: Category,
        head_is_left: bool,
        left: Tree,
        right: Tree,
        combinator: Combinator,
    ) -> Tree {
        Tree::Binary {
            category,
            head_is_left,
            left: Box::new(left),
            right: Box::new(right),
            combinator,
        }
    }

    /// Builds a unary or binary node from children in left-to-right order.
    /// Binary nodes get [`Combinator::Unknown`].
    pub fn from_children(
        &self,
        category: Category,
        children: Vec<Tree>,
        head_is_left: bool,
    ) -> ReaderResult<Tree> {
        let count = children.len();
        let mut children = children.into_iter();
        match (children.next(), children.next(), children.next()) {
            (Some(child), None, None) => Ok(self.unary(category, child)),
            (Some(left), Some(right), None) => Ok(self.binary(
                category,
                head_is_left,
                left,
                right,
                Combinator::Unknown,
            )),
            _ => Err(ReaderError::structure(format!(
                "'{}' node has {} children, expected 1 or 2",
                category, count
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(text: &str) -> Category {
        Category::parse(text).unwrap()
    }

    #[test]
    fn test_one_child_is_unary() {
        let builder = TreeBuilder::new(Language::En);
        let leaf = builder.terminal("dog", cat("N"), 0);
        let tree = builder.from_children(cat("NP"), vec![leaf], true).unwrap();
        assert!(matches!(tree, Tree::Unary { .. }));
    }

    #[test]
    fn test_derivation_carries_language() {
        let builder = TreeBuilder::new(Language::Ja);
        let tree = builder.terminal("犬", cat("N"), 0);
        let derivation = builder.derivation("s0", vec![Token::new("犬")], tree);
        assert_eq!(derivation.language, Language::Ja);
        assert_eq!(derivation.name, "s0");
        derivation.check().unwrap();
    }

    #[test]
    fn test_two_children_keep_order() {
        let builder = TreeBuilder::new(Language::En);
        let children = vec![
            builder.terminal("a", cat("NP/N"), 0),
            builder.terminal("dog", cat("N"), 1),
        ];
        let tree = builder.from_children(cat("NP"), children, false).unwrap();
        match &tree {
            Tree::Binary {
                left,
                right,
                head_is_left,
                combinator,
                ..
            } => {
                assert_eq!(left.word_positions(), vec![(0, "a")]);
                assert_eq!(right.word_positions(), vec![(1, "dog")]);
                assert!(!*head_is_left);
                assert!(combinator.is_unknown());
            }
            other => panic!("expected binary node, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_and_three_children_fail() {
        let builder = TreeBuilder::new(Language::En);
        assert!(builder.from_children(cat("S"), vec![], true).is_err());

        let three = (0..3)
            .map(|i| builder.terminal("x", cat("N"), i))
            .collect::<Vec<_>>();
        let err = builder.from_children(cat("S"), three, true).unwrap_err();
        assert!(err.to_string().contains("3 children"));
    }
}

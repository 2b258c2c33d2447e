mod common;

use ccg_reader::{read_str, Combinator, Format, Language, Token, Tree, TreeBuilder};
use common::{cat, to_ptb};
use proptest::prelude::*;

fn decode(line: &str) -> ccg_reader::Derivation {
    read_str(line, Format::Ptb, Language::En)
        .unwrap()
        .next()
        .expect("one derivation")
        .unwrap()
}

#[test]
fn single_noun_phrase() {
    let derivation = decode("(ROOT (NP (N dog)))");
    let builder = TreeBuilder::new(Language::En);
    assert_eq!(
        derivation.tree,
        builder.unary(cat("NP"), builder.terminal("dog", cat("N"), 0))
    );
    assert_eq!(derivation.tokens, vec![Token::new("dog")]);
    assert_eq!(derivation.name, "ID=0");
}

#[test]
fn binary_sentence_keeps_argument_order() {
    let derivation = decode("(ROOT (S (NP (N I)) (VP (V run))))");
    match &derivation.tree {
        Tree::Binary {
            category,
            left,
            right,
            combinator,
            ..
        } => {
            assert_eq!(category, &cat("S"));
            assert_eq!(left.category(), &cat("NP"));
            assert_eq!(right.category(), &cat("VP"));
            assert_eq!(*combinator, Combinator::Unknown);
        }
        other => panic!("expected a binary root, got {:?}", other),
    }
    assert_eq!(derivation.tree.word_positions(), vec![(0, "I"), (1, "run")]);
    assert_eq!(derivation.tokens, vec![Token::new("I"), Token::new("run")]);
    derivation.check().unwrap();
}

#[test]
fn stacked_closers_match_separate_closers() {
    let stacked = decode("(ROOT (S (NP (N big) (N dog)) (VP (V barks))))");
    let separate = decode("(ROOT (S (NP (N big) (N dog) ) (VP (V barks) ) ) )");
    assert_eq!(stacked.tree, separate.tree);
    assert_eq!(stacked.tokens, separate.tokens);
}

/// `depth` unary `NP` nodes over a single `N` leaf.
fn nested_line(depth: usize) -> String {
    let mut line = String::from("(ROOT ");
    for _ in 0..depth {
        line.push_str("(NP ");
    }
    line.push_str("(N x");
    line.push_str(&")".repeat(depth + 2));
    line
}

#[test]
fn deep_nesting_decodes_compares_and_drops() {
    let depth = 100_000;
    let derivation = decode(&nested_line(depth));
    derivation.check().unwrap();

    let builder = TreeBuilder::new(Language::En);
    let np = cat("NP");
    let mut expected = builder.terminal("x", cat("N"), 0);
    for _ in 0..depth {
        expected = builder.unary(np.clone(), expected);
    }
    assert!(derivation.tree == expected);

    drop(expected);
    drop(derivation);
}

fn leaf_category() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "N",
        "NP",
        "NP[nb]/N",
        "S[dcl]\\NP",
        "(S[dcl]\\NP)/NP",
        "conj",
        ",",
    ])
    .prop_map(String::from)
}

#[derive(Debug, Clone)]
enum Shape {
    Leaf(String, String),
    Unary(String, Box<Shape>),
    Binary(String, Box<Shape>, Box<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = (leaf_category(), "[a-z]{1,6}").prop_map(|(c, w)| Shape::Leaf(c, w));
    leaf.prop_recursive(6, 32, 2, |inner| {
        prop_oneof![
            (leaf_category(), inner.clone()).prop_map(|(c, s)| Shape::Unary(c, Box::new(s))),
            (leaf_category(), inner.clone(), inner)
                .prop_map(|(c, l, r)| Shape::Binary(c, Box::new(l), Box::new(r))),
        ]
    })
}

fn realize(shape: &Shape, builder: &TreeBuilder, tokens: &mut Vec<Token>) -> Tree {
    match shape {
        Shape::Leaf(category, word) => {
            tokens.push(Token::new(word.as_str()));
            builder.terminal(word.as_str(), cat(category), tokens.len() - 1)
        }
        Shape::Unary(category, child) => {
            let child = realize(child, builder, tokens);
            builder.unary(cat(category), child)
        }
        Shape::Binary(category, left, right) => {
            let left = realize(left, builder, tokens);
            let right = realize(right, builder, tokens);
            builder.binary(cat(category), true, left, right, Combinator::Unknown)
        }
    }
}

proptest! {
    #[test]
    fn bracket_lines_round_trip(shape in shape()) {
        let builder = TreeBuilder::new(Language::En);
        let mut tokens = Vec::new();
        let tree = realize(&shape, &builder, &mut tokens);

        let derivation = decode(&to_ptb(&tree));
        prop_assert_eq!(&derivation.tree, &tree);
        prop_assert_eq!(&derivation.tokens, &tokens);
        prop_assert!(derivation.check().is_ok());
    }
}

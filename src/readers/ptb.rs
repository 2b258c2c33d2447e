//! Bracket-format (PTB style) derivations.
//!
//! ```text
//! (ROOT (S (NP (N I)) (VP (V run))))
//! ```
//!
//! The line is split on whitespace. `(X` shifts category `X`; any other item
//! is a word followed by one or more `)`, each closing one constituent. The
//! decoder is an explicit shift-reduce machine, so nesting depth is bounded by
//! the heap rather than the call stack.

use tracing::trace;

use crate::ast::{Language, Token, Tree, TreeBuilder};
use crate::errors::{ReaderError, ReaderResult};
use crate::syntax::Category;

const ROOT: &str = "(ROOT";

/// One slot of the shift-reduce stack.
#[derive(Debug)]
enum Entry {
    Category(Category),
    Word(String),
    Tree(Tree),
}

struct ShiftReduce {
    stack: Vec<Entry>,
    tokens: Vec<Token>,
    position: usize,
    builder: TreeBuilder,
}

impl ShiftReduce {
    fn new(language: Language) -> Self {
        ShiftReduce {
            stack: Vec::new(),
            tokens: Vec::new(),
            position: 0,
            builder: TreeBuilder::new(language),
        }
    }

    fn shift_category(&mut self, category: Category) {
        self.stack.push(Entry::Category(category));
    }

    fn shift_word(&mut self, word: &str) {
        self.tokens.push(Token::new(word));
        self.stack.push(Entry::Word(word.to_string()));
    }

    /// Closes the innermost open constituent.
    fn reduce(&mut self) -> ReaderResult<()> {
        let tree = match self.stack.last() {
            Some(Entry::Word(_)) => self.reduce_terminal()?,
            Some(Entry::Tree(_)) => self.reduce_children()?,
            Some(Entry::Category(category)) => {
                return Err(ReaderError::structure(format!(
                    "constituent '{}' closed before any word",
                    category
                )))
            }
            None => return Err(ReaderError::structure("unbalanced ')'")),
        };
        self.stack.push(Entry::Tree(tree));
        Ok(())
    }

    fn reduce_terminal(&mut self) -> ReaderResult<Tree> {
        let word = match self.stack.pop() {
            Some(Entry::Word(word)) => word,
            _ => return Err(ReaderError::structure("expected a word on the stack")),
        };
        let category = match self.stack.pop() {
            Some(Entry::Category(category)) => category,
            _ => {
                return Err(ReaderError::structure(format!(
                    "word '{}' has no category",
                    word
                )))
            }
        };
        let tree = self.builder.terminal(word, category, self.position);
        self.position += 1;
        Ok(tree)
    }

    fn reduce_children(&mut self) -> ReaderResult<Tree> {
        let mut children = Vec::new();
        while matches!(self.stack.last(), Some(Entry::Tree(_))) {
            if let Some(Entry::Tree(tree)) = self.stack.pop() {
                children.push(tree);
            }
        }
        // Popped right-to-left.
        children.reverse();

        let category = match self.stack.pop() {
            Some(Entry::Category(category)) => category,
            _ => {
                return Err(ReaderError::structure(format!(
                    "{} constituent(s) closed without a parent category",
                    children.len()
                )))
            }
        };
        self.builder.from_children(category, children, true)
    }

    /// Succeeds only when the stack holds exactly one completed tree.
    fn finish(mut self) -> ReaderResult<(Tree, Vec<Token>)> {
        let remaining = self.stack.len();
        match (self.stack.pop(), remaining) {
            (Some(Entry::Tree(tree)), 1) => Ok((tree, self.tokens)),
            _ => Err(ReaderError::structure(format!(
                "unresolved stack of {} entries at end of input",
                remaining
            ))),
        }
    }
}

/// Parses one bracket-format line into its tree and token sequence.
pub fn parse_ptb(text: &str, language: Language) -> ReaderResult<(Tree, Vec<Token>)> {
    let mut items: Vec<&str> = text.split_whitespace().collect();
    if items.first() != Some(&ROOT) {
        return Err(ReaderError::structure(
            "bracket tree must start with '(ROOT '",
        ));
    }
    // The last ')' closes ROOT itself.
    let last = items
        .pop()
        .and_then(|item| item.strip_suffix(')'))
        .ok_or_else(|| ReaderError::structure("bracket tree must end with ')'"))?;
    if !last.is_empty() {
        items.push(last);
    }

    let mut machine = ShiftReduce::new(language);
    for item in &items[1..] {
        if let Some(label) = item.strip_prefix('(') {
            machine.shift_category(Category::parse(label)?);
        } else if item.ends_with(')') {
            let word = item.trim_end_matches(')');
            if !word.is_empty() {
                machine.shift_word(word);
            }
            for _ in 0..item.len() - word.len() {
                machine.reduce()?;
            }
        } else {
            return Err(ReaderError::structure(format!(
                "unexpected item '{}': expected '(category' or 'word)'",
                item
            )));
        }
    }
    trace!(tokens = machine.tokens.len(), "bracket tree reduced");
    machine.finish()
}

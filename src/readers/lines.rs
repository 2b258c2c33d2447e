//! Line framing shared by the AUTO and PTB readers.
//!
//! Blank lines are skipped. A line starting with `ID` names the next tree
//! line; the name is consumed by that tree. Tree lines without a pending name
//! are called `ID={index}`, where `index` is the 0-based line number.

use std::io::{BufRead, Lines};
use std::iter::Enumerate;

use crate::ast::{Derivation, Language, Token, Tree, TreeBuilder};
use crate::errors::ReaderResult;

/// Prefix of a derivation-name line.
pub const NAME_MARKER: &str = "ID";

/// Decodes one tree line.
pub type LineParser = fn(&str, Language) -> ReaderResult<(Tree, Vec<Token>)>;

/// Lazily decodes one derivation per tree line.
pub struct LineDerivations<R> {
    lines: Enumerate<Lines<R>>,
    pending_name: Option<String>,
    parse: LineParser,
    language: Language,
}

impl<R: BufRead> LineDerivations<R> {
    pub fn new(reader: R, parse: LineParser, language: Language) -> Self {
        LineDerivations {
            lines: reader.lines().enumerate(),
            pending_name: None,
            parse,
            language,
        }
    }
}

impl<R: BufRead> Iterator for LineDerivations<R> {
    type Item = ReaderResult<Derivation>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, line) = self.lines.next()?;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with(NAME_MARKER) {
                self.pending_name = Some(line.to_string());
                continue;
            }

            let name = self
                .pending_name
                .take()
                .unwrap_or_else(|| format!("{}={}", NAME_MARKER, index));
            let builder = TreeBuilder::new(self.language);
            let derivation = (self.parse)(line, self.language)
                .map(|(tree, tokens)| builder.derivation(name.clone(), tokens, tree))
                .map_err(|e| e.in_derivation(&name));
            return Some(derivation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Category;
    use std::io::Cursor;

    fn single_word(text: &str, language: Language) -> ReaderResult<(Tree, Vec<Token>)> {
        let builder = TreeBuilder::new(language);
        let category = Category::parse("N")?;
        Ok((builder.terminal(text, category, 0), vec![Token::new(text)]))
    }

    fn names(input: &str) -> Vec<String> {
        LineDerivations::new(Cursor::new(input.to_string()), single_word, Language::En)
            .map(|d| d.unwrap().name)
            .collect()
    }

    #[test]
    fn test_marker_names_next_tree() {
        assert_eq!(names("ID=a\ndog\nID=b\ncat\n"), vec!["ID=a", "ID=b"]);
    }

    #[test]
    fn test_fallback_uses_line_index() {
        assert_eq!(names("\ndog\n\ncat\n"), vec!["ID=1", "ID=3"]);
    }

    #[test]
    fn test_name_is_consumed() {
        assert_eq!(names("ID=a\ndog\ncat\n"), vec!["ID=a", "ID=2"]);
    }

    #[test]
    fn test_marker_without_tree_is_dropped() {
        assert_eq!(names("ID=first\n\nID=second\ndog\n"), vec!["ID=second"]);
    }
}

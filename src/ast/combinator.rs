//! Combinator tags on binary derivation nodes.

use std::fmt;

use serde::{Serialize, Serializer};

/// The combinatory rule that built a binary node.
///
/// None of the supported serializations record the rule, so every reader
/// emits [`Combinator::Unknown`]. Combinator inference runs later and replaces
/// the tag by matching the categories of the node and its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    ForwardApplication,
    BackwardApplication,
    ForwardComposition,
    BackwardComposition,
    GeneralizedForwardComposition,
    GeneralizedBackwardComposition,
    BackwardCrossedComposition,
    ForwardTypeRaising,
    BackwardTypeRaising,
    Conjunction,
    RemovePunctuation,
    /// The combinator is not recoverable from this serialization.
    Unknown,
}

impl Combinator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Combinator::ForwardApplication => ">",
            Combinator::BackwardApplication => "<",
            Combinator::ForwardComposition => ">B",
            Combinator::BackwardComposition => "<B",
            Combinator::GeneralizedForwardComposition => ">B2",
            Combinator::GeneralizedBackwardComposition => "<B2",
            Combinator::BackwardCrossedComposition => "<Bx",
            Combinator::ForwardTypeRaising => ">T",
            Combinator::BackwardTypeRaising => "<T",
            Combinator::Conjunction => "<Φ>",
            Combinator::RemovePunctuation => "<rp>",
            Combinator::Unknown => "<unk>",
        }
    }

    /// Maps a conventional rule symbol back to its combinator.
    pub fn from_symbol(symbol: &str) -> Option<Combinator> {
        let combinator = match symbol {
            ">" => Combinator::ForwardApplication,
            "<" => Combinator::BackwardApplication,
            ">B" => Combinator::ForwardComposition,
            "<B" | "<B1" => Combinator::BackwardComposition,
            ">B2" => Combinator::GeneralizedForwardComposition,
            "<B2" => Combinator::GeneralizedBackwardComposition,
            "<Bx" => Combinator::BackwardCrossedComposition,
            ">T" => Combinator::ForwardTypeRaising,
            "<T" => Combinator::BackwardTypeRaising,
            "<Φ>" => Combinator::Conjunction,
            "<rp>" => Combinator::RemovePunctuation,
            "<unk>" => Combinator::Unknown,
            _ => return None,
        };
        Some(combinator)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Combinator::Unknown)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Combinator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_map_back() {
        for combinator in [
            Combinator::ForwardApplication,
            Combinator::BackwardApplication,
            Combinator::ForwardComposition,
            Combinator::BackwardComposition,
            Combinator::GeneralizedForwardComposition,
            Combinator::GeneralizedBackwardComposition,
            Combinator::BackwardCrossedComposition,
            Combinator::ForwardTypeRaising,
            Combinator::BackwardTypeRaising,
            Combinator::Conjunction,
            Combinator::RemovePunctuation,
            Combinator::Unknown,
        ] {
            assert_eq!(Combinator::from_symbol(combinator.symbol()), Some(combinator));
        }
        assert_eq!(Combinator::from_symbol("fa"), None);
    }

    #[test]
    fn test_composition_symbols_are_symmetric() {
        assert_eq!(Combinator::ForwardComposition.symbol(), ">B");
        assert_eq!(Combinator::BackwardComposition.symbol(), "<B");
        assert_eq!(
            Combinator::from_symbol("<B1"),
            Some(Combinator::BackwardComposition)
        );
    }

    #[test]
    fn test_unknown_is_explicit() {
        assert!(Combinator::Unknown.is_unknown());
        assert!(!Combinator::ForwardApplication.is_unknown());
        assert_eq!(Combinator::Unknown.to_string(), "<unk>");
    }
}

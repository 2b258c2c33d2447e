//! Surface tokens attached to derivation leaves.

use serde::{Deserialize, Serialize};

/// One surface token with its optional linguistic annotations.
///
/// Tokens are built once per leaf and never modified afterwards; the
/// `with_*` methods consume the token and return the annotated copy.
/// Identity is positional: equal fields at different positions are still
/// different tokens of the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Token {
    word: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    lemma: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    chunk: Option<String>,
}

impl Token {
    pub fn new(word: impl Into<String>) -> Self {
        Token {
            word: word.into(),
            ..Default::default()
        }
    }

    pub fn with_pos(mut self, pos: Option<impl Into<String>>) -> Self {
        self.pos = pos.map(Into::into);
        self
    }

    pub fn with_entity(mut self, entity: Option<impl Into<String>>) -> Self {
        self.entity = entity.map(Into::into);
        self
    }

    pub fn with_lemma(mut self, lemma: Option<impl Into<String>>) -> Self {
        self.lemma = lemma.map(Into::into);
        self
    }

    pub fn with_chunk(mut self, chunk: Option<impl Into<String>>) -> Self {
        self.chunk = chunk.map(Into::into);
        self
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    pub fn chunk(&self) -> Option<&str> {
        self.chunk.as_deref()
    }
}

//! Owned element trees for the XML readers.
//!
//! `roxmltree` documents borrow their input text, which makes them awkward to
//! keep inside a lazy iterator. Readers convert the parsed document into this
//! owned `Element` tree once and decode derivations from it on demand.

use std::mem;

use crate::errors::{ReaderError, ReaderResult};

/// An XML element with its attributes and element children. Text, comments
/// and processing instructions are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Parses a whole document and returns its root element.
    pub fn parse_document(text: &str) -> ReaderResult<Element> {
        let document = roxmltree::Document::parse(text)?;
        Ok(Element::from_node(document.root_element()))
    }

    /// Copies the element tree under `root` without recursing, so nesting
    /// depth is bounded by the heap.
    fn from_node(root: roxmltree::Node) -> Element {
        let mut open = Vec::new();
        let mut current = (Element::shell(root), root.children());
        loop {
            if let Some(child) = current.1.find(|c| c.is_element()) {
                let parent = mem::replace(&mut current, (Element::shell(child), child.children()));
                open.push(parent);
                continue;
            }
            match open.pop() {
                Some(mut parent) => {
                    parent.0.children.push(current.0);
                    current = parent;
                }
                None => return current.0,
            }
        }
    }

    fn shell(node: roxmltree::Node) -> Element {
        Element {
            name: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`Element::attr`], but a missing attribute is a structural error.
    pub fn required(&self, name: &str) -> ReaderResult<&str> {
        self.attr(name).ok_or_else(|| {
            ReaderError::structure(format!(
                "<{}> element is missing the '{}' attribute",
                self.name, name
            ))
        })
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn into_children(mut self) -> Vec<Element> {
        mem::take(&mut self.children)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// All descendants with the given name, in document order.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        let mut pending: Vec<&Element> = self.children.iter().rev().collect();
        while let Some(element) = pending.pop() {
            if element.name == name {
                found.push(element);
            }
            pending.extend(element.children.iter().rev());
        }
        found
    }
}

impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut element) = pending.pop() {
            pending.append(&mut element.children);
        }
    }
}

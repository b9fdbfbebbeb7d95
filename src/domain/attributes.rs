use std::fmt;

use serde::{Deserialize, Serialize};

/// Order in which attributes are emitted by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeOrder {
    /// Byte order of attribute names.
    #[default]
    Lexical,
    /// Position of the first assignment of each name.
    Insertion,
}

impl fmt::Display for AttributeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeOrder::Lexical => write!(f, "lexical"),
            AttributeOrder::Insertion => write!(f, "insertion"),
        }
    }
}

/// Attribute mapping of a single element.
///
/// Names are unique. Re-assigning a name replaces the value in place, so the
/// entry keeps the position of its first assignment. Nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins.
    pub(crate) fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns the entries in the requested order.
    pub fn ordered(&self, order: AttributeOrder) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        if order == AttributeOrder::Lexical {
            pairs.sort_by(|a, b| a.0.cmp(b.0));
        }
        pairs
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An `AttributeName` represents the name of a shortcode attribute.
///
/// Attribute names are lowercased during parsing, matching the host
/// shortcode convention.
pub type AttributeName = String;

/// An `AttributeValue` represents the value of a shortcode attribute.
///
/// An attribute value can be a string, a boolean, or nothing. A bare
/// attribute with no `=value` part parses as `Bool(true)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A string attribute value.
    String(String),
    /// A boolean attribute value. `false` means it is unset.
    Bool(bool),
    /// No value (or it was unset)
    None,
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::String(value) => write!(f, "{value}"),
            AttributeValue::Bool(value) => write!(f, "{value}"),
            AttributeValue::None => write!(f, "null"),
        }
    }
}

/// The attributes of a single shortcode occurrence.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementAttributes(BTreeMap<AttributeName, AttributeValue>);

impl ElementAttributes {
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeName, &AttributeValue)> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Insert a new attribute.
    //
    // NOTE: This will *NOT* overwrite an existing attribute with the same name.
    pub fn insert(&mut self, name: AttributeName, value: AttributeValue) {
        if !self.contains_key(&name) {
            self.0.insert(name, value);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

/// Byte span of a shortcode occurrence within the scanned document.
///
/// `absolute_end` is one past the last byte of the occurrence, so
/// `&content[absolute_start..absolute_end]` is the matched text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub absolute_start: usize,
    pub absolute_end: usize,
}

/// A single shortcode occurrence extracted from document text.
///
/// The body is the raw inner text, untouched. An `escaped` occurrence
/// (doubled brackets, `[[tag]…[/tag]]`) is reported for completeness but
/// must not activate any resources; renderers emit it as literal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortcode {
    pub attributes: ElementAttributes,
    pub body: String,
    pub escaped: bool,
    pub location: Location,
}

impl Shortcode {
    /// Get a string attribute value by name.
    ///
    /// Returns `None` for absent attributes and for bare (boolean) ones.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self.attributes.get(name) {
            Some(AttributeValue::String(value)) => Some(value.as_str()),
            Some(AttributeValue::Bool(_) | AttributeValue::None) | None => None,
        }
    }
}

// Grammar output before attribute ordering and span assignment.
#[derive(Debug, Default)]
pub(crate) struct RawShortcode {
    pub(crate) attributes: Vec<(AttributeName, AttributeValue)>,
    pub(crate) body: String,
    pub(crate) escaped: bool,
}

impl RawShortcode {
    pub(crate) fn into_shortcode(self, absolute_start: usize, absolute_end: usize) -> Shortcode {
        let mut attributes = ElementAttributes::default();
        for (name, value) in self.attributes {
            // First occurrence of a duplicated name wins.
            attributes.insert(name, value);
        }
        Shortcode {
            attributes,
            body: self.body,
            escaped: self.escaped,
            location: Location {
                absolute_start,
                absolute_end,
            },
        }
    }
}

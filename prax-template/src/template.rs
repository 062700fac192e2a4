//! Query templates as an ordered sequence of fragments.
//!
//! A template is built once and rendered many times with different
//! arguments. Rendering never mutates it, so a single template can be shared
//! across threads behind an `Arc`.
//!
//! ```rust
//! use prax_template::{Part, Template};
//!
//! let template = Template::builder()
//!     .slot()
//!     .arg_ref(0)
//!     .literal(" FROM users")
//!     .build();
//!
//! assert_eq!(template.len(), 3);
//! assert_eq!(template.expected_args(), Some(2));
//! assert_eq!(template.parts()[1], Part::ArgRef(0));
//! ```
//!
//! Templates serialize as a JSON array of fragments:
//!
//! ```rust
//! use prax_template::Template;
//!
//! let template: Template =
//!     serde_json::from_str(r#"[{"literal": "SELECT "}, {"arg_ref": 0}, "slot"]"#).unwrap();
//! assert_eq!(template.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// A single template fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Raw text copied verbatim into the output.
    Literal(String),
    /// The text argument at the given position, spliced verbatim.
    ArgRef(usize),
    /// The argument under the cursor, formatted by its type and wrapped in parentheses.
    Slot,
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

/// An immutable, ordered sequence of fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    parts: Vec<Part>,
}

impl Template {
    /// Create a template from its fragments.
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Start building a template fragment by fragment.
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    /// The fragments, in render order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the template has no fragments.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of arguments a render call must supply.
    ///
    /// `None` for an empty template, which accepts no argument list at all.
    pub fn expected_args(&self) -> Option<usize> {
        self.parts.len().checked_sub(1)
    }

    /// Total length of the literal fragments, used to size the output buffer.
    pub(crate) fn literal_len(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match part {
                Part::Literal(text) => text.len(),
                _ => 0,
            })
            .sum()
    }
}

impl From<Vec<Part>> for Template {
    fn from(parts: Vec<Part>) -> Self {
        Self::new(parts)
    }
}

impl FromIterator<Part> for Template {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Fluent builder for [`Template`].
#[derive(Debug, Clone, Default)]
pub struct TemplateBuilder {
    parts: Vec<Part>,
}

impl TemplateBuilder {
    /// Append a literal fragment.
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Literal(text.into()));
        self
    }

    /// Append a reference to the text argument at `index`.
    pub fn arg_ref(mut self, index: usize) -> Self {
        self.parts.push(Part::ArgRef(index));
        self
    }

    /// Append a typed scalar slot.
    pub fn slot(mut self) -> Self {
        self.parts.push(Part::Slot);
        self
    }

    /// Append a fragment.
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Finish the template.
    pub fn build(self) -> Template {
        Template::new(self.parts)
    }
}

//! The ordered, deduplicated list of options.

use serde::{Deserialize, Serialize};

use crate::error::{OptionError, OptionResult};

/// An ordered list of unique, non-blank options.
///
/// Insertion order is preserved. Every element is trimmed, non-empty and
/// unique; the only ways in are [`OptionList::push`] and the validating
/// [`TryFrom`] conversion, so the invariant holds for every value of this
/// type, including deserialized ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct OptionList {
    items: Vec<String>,
}

impl OptionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no options.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the options in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// The options as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// The option at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Whether an option equal to `text` exists (exact match).
    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|o| o == text)
    }

    /// Check `text` against the list without mutating it.
    ///
    /// Returns the trimmed value that [`push`](Self::push) would store.
    pub fn validate(&self, text: &str) -> OptionResult<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(OptionError::Empty);
        }
        if self.contains(trimmed) {
            return Err(OptionError::Duplicate(trimmed.to_string()));
        }
        Ok(trimmed.to_string())
    }

    /// Validate `text` and append it. Returns the stored (trimmed) value.
    pub fn push(&mut self, text: &str) -> OptionResult<&str> {
        let value = self.validate(text)?;
        self.items.push(value);
        Ok(self.items.last().map(String::as_str).unwrap_or_default())
    }

    /// Remove every option equal to `text`. Returns how many were removed.
    pub fn remove(&mut self, text: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|o| o != text);
        before - self.items.len()
    }

    /// Remove all options.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl TryFrom<Vec<String>> for OptionList {
    type Error = OptionError;

    /// Build a list from untrusted values, trimming each entry.
    ///
    /// Fails on the first blank or duplicate entry.
    fn try_from(values: Vec<String>) -> OptionResult<Self> {
        let mut list = Self::new();
        for value in values {
            list.push(&value)?;
        }
        Ok(list)
    }
}

impl From<OptionList> for Vec<String> {
    fn from(list: OptionList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

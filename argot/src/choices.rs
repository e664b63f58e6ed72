/*!
The set of allowed values for an argument, and the [`Completer`] tag that
shell completion derives from it.
*/

use core::slice;

use crate::value::ValueType;

/**
An ordered mapping of allowed values to their descriptions.

Order is insertion order, since it's the order choices are listed in usage
messages and error text. Inserting a key a second time replaces its
description without moving it.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    entries: Vec<(String, String)>,
}

impl Choices {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a choice, or update the description of an existing one
    pub fn insert(&mut self, key: impl Into<String>, description: impl Into<String>) {
        let key = key.into();
        let description = description.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing)) => *existing = description,
            None => self.entries.push((key, description)),
        }
    }

    /// Chainable form of [`insert`][Choices::insert]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.insert(key, description);
        self
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    #[must_use]
    pub fn description(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, description)| description.as_str())
    }

    /// The allowed values, in order
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            entries: self.entries.iter(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + Clone {
        self.entries
            .iter()
            .map(|(key, description)| (key.as_str(), description.as_str()))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Choices {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut choices = Self::new();
        iter.into_iter()
            .for_each(|(key, description)| choices.insert(key, description));
        choices
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Choices {
    #[inline]
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Iterator over the keys of a [`Choices`]
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    entries: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.entries.next().map(|(key, _)| key.as_str())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

/**
How shell completion should produce suggestions for an argument's value.

This is only a tag; the completion backends that act on it live outside of
`argot`.
*/
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Completer {
    /// No suggestions
    None,

    /// Suggest exactly these values
    List(Vec<String>),

    /// Suggest filesystem paths
    #[default]
    Path,
}

impl Completer {
    /// The completer an argument gets when none was given explicitly: its
    /// choices if it has any, otherwise paths for string-like types.
    #[must_use]
    pub fn derive(choices: &Choices, value_type: &ValueType) -> Self {
        if !choices.is_empty() {
            Self::List(choices.keys().map(str::to_owned).collect())
        } else if let Some(variants) = value_type.variants() {
            Self::List(variants.to_vec())
        } else if value_type.is_string_like() {
            Self::Path
        } else {
            Self::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinsert_keeps_position() {
        let choices = Choices::from([("a", "first"), ("b", "second")]).with("a", "updated");

        assert_eq!(choices.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(choices.description("a"), Some("updated"));
        assert_eq!(choices.len(), 2);
    }

    #[test]
    fn completer_prefers_choices() {
        let choices = Choices::from([("fast", ""), ("slow", "")]);

        assert_eq!(
            Completer::derive(&choices, &ValueType::Int),
            Completer::List(vec!["fast".to_owned(), "slow".to_owned()])
        );
        assert_eq!(
            Completer::derive(&Choices::new(), &ValueType::Path),
            Completer::Path
        );
        assert_eq!(
            Completer::derive(&Choices::new(), &ValueType::Float),
            Completer::None
        );
        assert_eq!(
            Completer::derive(&Choices::new(), &ValueType::enumeration(["x"])),
            Completer::List(vec!["x".to_owned()])
        );
    }
}

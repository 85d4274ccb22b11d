//! Tag parsing for field metadata.
//!
//! Each field carries one raw metadata string such as `"max=10,required"`.
//! Parsing turns it into an ordered [`TagCollection`]:
//!
//! - The string is split on the entry separator (`,` by default).
//! - Each entry is split at the *first* value separator (`=` by default).
//!   The left side is the key, everything after it is the value, so a value
//!   may itself contain `=`.
//! - An entry without a value separator is a bare key with an empty value.
//!
//! There is no trimming and no escaping. An empty entry still yields a tag
//! with an empty key, so the empty string parses to exactly one tag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Separators used to split raw metadata, plus the reserved display-name key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSyntax {
    pub separator: String,
    pub value_separator: String,
    /// Key whose value overrides the field's display name (`name=Age`).
    pub name_key: String,
}

impl Default for TagSyntax {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            value_separator: "=".to_string(),
            name_key: "name".to_string(),
        }
    }
}

impl TagSyntax {
    /// Directive tags configure the field rather than name a rule.
    pub fn is_directive(&self, tag: &Tag) -> bool {
        tag.key.is_empty() || tag.key == self.name_key
    }
}

/// One parsed metadata entry.
///
/// `key` and `value` never change after parsing. The failed flag is owned by
/// the run's [`FailureSink`](crate::sink::FailureSink): it is only set while
/// the sink's write lock is held and only read under its read lock.
#[derive(Debug)]
pub struct Tag {
    pub key: String,
    pub value: String,
    has_failed: AtomicBool,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            has_failed: AtomicBool::new(false),
        }
    }

    pub(crate) fn mark_failed(&self) {
        self.has_failed.store(true, Ordering::Relaxed);
    }

    pub(crate) fn failed_flag(&self) -> bool {
        self.has_failed.load(Ordering::Relaxed)
    }
}

impl Clone for Tag {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            has_failed: AtomicBool::new(self.failed_flag()),
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl Eq for Tag {}

/// Ordered tags of one field, in order of appearance. Duplicate keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCollection(Vec<Tag>);

impl TagCollection {
    /// Parse a raw metadata string with the default separators.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, &TagSyntax::default())
    }

    pub fn parse_with(raw: &str, syntax: &TagSyntax) -> Self {
        let tags = raw
            .split(syntax.separator.as_str())
            .map(|entry| match entry.split_once(syntax.value_separator.as_str()) {
                Some((key, value)) => Tag::new(key, value),
                None => Tag::new(entry, ""),
            })
            .collect();
        Self(tags)
    }

    /// First tag whose key equals `key`.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.0.iter().find(|tag| tag.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagCollection {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! Per-field validation context.
//!
//! A [`FieldContext`] is built for one field of one record during one run.
//! It owns the field's parsed tags and display name and borrows the run's
//! shared [`FailureSink`]. Rules read everything through it and report
//! failures back through [`FieldContext::set_failure`].
//!
//! ## Display names
//!
//! Resolved once at construction, first match wins:
//! 1. The value of the reserved `name` tag (`"required,name=E-mail"`).
//! 2. The field's separate display-name metadata.
//! 3. Derived from the identifier by [`format_field_name`].

use tracing::debug;

use crate::dispatch::{dispatch, Outcome};
use crate::error::Result;
use crate::record::{Field, FieldMeta};
use crate::rules::Registry;
use crate::sink::FailureSink;
use crate::tags::{Tag, TagCollection, TagSyntax};
use crate::value::{FieldKind, FieldValue};

pub struct FieldContext<'a> {
    meta: &'a FieldMeta,
    value: &'a FieldValue,
    display_name: String,
    tags: TagCollection,
    syntax: &'a TagSyntax,
    sink: &'a FailureSink,
}

impl<'a> FieldContext<'a> {
    pub fn new(field: &'a Field, sink: &'a FailureSink, syntax: &'a TagSyntax) -> Self {
        let tags = TagCollection::parse_with(field.meta.tags, syntax);
        let display_name = match tags.get(&syntax.name_key) {
            Some(tag) => tag.value.clone(),
            None => match field.meta.display_name {
                Some(name) => name.to_string(),
                None => format_field_name(field.meta.ident),
            },
        };

        Self {
            meta: &field.meta,
            value: &field.value,
            display_name,
            tags,
            syntax,
            sink,
        }
    }

    pub fn meta(&self) -> &FieldMeta {
        self.meta
    }

    pub fn value(&self) -> &FieldValue {
        self.value
    }

    pub fn kind(&self) -> FieldKind {
        self.value.kind()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn tags(&self) -> &TagCollection {
        &self.tags
    }

    pub fn tag(&self, key: &str) -> Option<&Tag> {
        self.tags.get(key)
    }

    pub fn contains_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn set_failure(&self, tag: Option<&Tag>, message: impl Into<String>) {
        self.sink.record(tag, message);
    }

    pub fn has_failed(&self, tag: &Tag) -> bool {
        self.sink.has_failed(tag)
    }

    /// Run every rule tag of this field against `registry`.
    ///
    /// Directive tags (`name`, empty entries) are skipped. Failures land in
    /// the shared sink; the first configuration error stops this field.
    /// Returns the number of failures this field recorded.
    pub fn validate(&self, registry: &Registry) -> Result<usize> {
        let mut failures = 0;
        for tag in self.tags.iter().filter(|t| !self.syntax.is_directive(t)) {
            if dispatch(registry, self, tag)? == Outcome::Failed {
                failures += 1;
            }
        }
        debug!(field = self.meta.ident, failures, "field validated");
        Ok(failures)
    }
}

/// Turn an identifier into a human-readable name.
///
/// Only letters are considered; digits and punctuation are dropped. The
/// first letter is capitalised. An uppercase letter that follows a
/// non-uppercase letter starts a new lowercase word; one that follows
/// another uppercase letter is lowercased into the current word. Letters
/// without case count as seen but are not emitted.
///
/// `FirstName` becomes `First name`, `ID` becomes `Id`, `aB` becomes `A b`.
pub fn format_field_name(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut first = true;
    let mut prev_upper = false;

    for c in ident.chars().filter(|c| c.is_alphabetic()) {
        if c.is_uppercase() {
            if first {
                out.push(c);
            } else {
                if !prev_upper {
                    out.push(' ');
                }
                out.extend(c.to_lowercase());
            }
            prev_upper = true;
        } else if c.is_lowercase() {
            if first {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            prev_upper = false;
        }
        first = false;
    }

    out
}

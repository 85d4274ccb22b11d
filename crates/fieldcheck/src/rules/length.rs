//! `maxlen` and `minlen`: bounds on text length, counted in characters.
//!
//! Both accept text directly or behind references. A nil reference passes;
//! pair with `required` to reject absence.

use tracing::warn;

use super::Rule;
use crate::context::FieldContext;
use crate::error::{Result, ValidationError};
use crate::tags::Tag;
use crate::value::FieldValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLen;

#[derive(Debug, Clone, Copy, Default)]
pub struct MinLen;

impl Rule for MaxLen {
    fn name(&self) -> &'static str {
        "maxlen"
    }

    fn test(&self, ctx: &FieldContext<'_>, tag: &Tag) -> Result<bool> {
        test_length(self.name(), ctx, tag, |len, bound| len <= bound)
    }

    fn failure_message(&self, ctx: &FieldContext<'_>, tag: &Tag) -> String {
        format!(
            "{} cannot be longer than {} characters.",
            ctx.display_name(),
            tag.value
        )
    }
}

impl Rule for MinLen {
    fn name(&self) -> &'static str {
        "minlen"
    }

    fn test(&self, ctx: &FieldContext<'_>, tag: &Tag) -> Result<bool> {
        test_length(self.name(), ctx, tag, |len, bound| len >= bound)
    }

    fn failure_message(&self, ctx: &FieldContext<'_>, tag: &Tag) -> String {
        format!(
            "{} cannot be shorter than {} characters.",
            ctx.display_name(),
            tag.value
        )
    }
}

fn test_length(
    rule: &'static str,
    ctx: &FieldContext<'_>,
    tag: &Tag,
    passes: impl Fn(usize, usize) -> bool,
) -> Result<bool> {
    let text = match ctx.value().deref_all() {
        None => return Ok(true),
        Some(FieldValue::Text(s)) => s,
        Some(other) => {
            return Err(ValidationError::UnexpectedType {
                rule,
                kind: other.kind(),
            })
        }
    };

    match tag.value.parse::<usize>() {
        Ok(bound) => Ok(passes(text.chars().count(), bound)),
        Err(e) => {
            warn!(
                rule,
                field = ctx.meta().ident,
                value = %tag.value,
                error = %e,
                "rule argument does not parse; treating as failed"
            );
            Ok(false)
        }
    }
}

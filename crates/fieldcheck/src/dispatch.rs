//! Tag-to-rule dispatch.
//!
//! Looks up the rule named by a tag's key and runs it against the field.
//! A failed test is recorded in the run's sink through the context; an
//! unknown rule name or a rule error is returned to the caller instead.

use tracing::debug;

use crate::context::FieldContext;
use crate::error::{Result, ValidationError};
use crate::rules::Registry;
use crate::tags::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The failure message has already been recorded.
    Failed,
}

pub fn dispatch(registry: &Registry, ctx: &FieldContext<'_>, tag: &Tag) -> Result<Outcome> {
    let rule = registry
        .get(&tag.key)
        .ok_or_else(|| ValidationError::UnknownRule(tag.key.clone()))?;

    let passed = rule.test(ctx, tag)?;
    debug!(
        rule = rule.name(),
        field = ctx.meta().ident,
        value = %tag.value,
        passed,
        "rule tested"
    );

    if passed {
        Ok(Outcome::Passed)
    } else {
        ctx.set_failure(Some(tag), rule.failure_message(ctx, tag));
        Ok(Outcome::Failed)
    }
}

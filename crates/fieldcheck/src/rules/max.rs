use super::bounds::{test_bound, Limit};
use super::Rule;
use crate::context::FieldContext;
use crate::error::Result;
use crate::tags::Tag;

/// `max=<n>`: a numeric field may not exceed `n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl Rule for Max {
    fn name(&self) -> &'static str {
        "max"
    }

    fn test(&self, ctx: &FieldContext<'_>, tag: &Tag) -> Result<bool> {
        test_bound(self.name(), Limit::Upper, ctx, tag)
    }

    fn failure_message(&self, ctx: &FieldContext<'_>, tag: &Tag) -> String {
        format!("{} cannot be greater than {}.", ctx.display_name(), tag.value)
    }
}

use super::bounds::{test_bound, Limit};
use super::Rule;
use crate::context::FieldContext;
use crate::error::Result;
use crate::tags::Tag;

/// `min=<n>`: a numeric field may not fall below `n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl Rule for Min {
    fn name(&self) -> &'static str {
        "min"
    }

    fn test(&self, ctx: &FieldContext<'_>, tag: &Tag) -> Result<bool> {
        test_bound(self.name(), Limit::Lower, ctx, tag)
    }

    fn failure_message(&self, ctx: &FieldContext<'_>, tag: &Tag) -> String {
        format!("{} cannot be less than {}.", ctx.display_name(), tag.value)
    }
}

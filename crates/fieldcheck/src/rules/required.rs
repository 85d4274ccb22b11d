use super::Rule;
use crate::context::FieldContext;
use crate::error::{Result, ValidationError};
use crate::tags::Tag;
use crate::value::FieldValue;

/// `required`: text must be non-empty, references must resolve.
///
/// A reference is followed through every level of indirection and fails if
/// any level is nil. Only the chain is checked: a reference that resolves to
/// empty text passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Rule for Required {
    fn name(&self) -> &'static str {
        "required"
    }

    fn test(&self, ctx: &FieldContext<'_>, _tag: &Tag) -> Result<bool> {
        match ctx.value() {
            FieldValue::Text(s) => Ok(!s.is_empty()),
            value @ FieldValue::Ref(_) => Ok(value.deref_all().is_some()),
            _ => Err(ValidationError::UnexpectedType {
                rule: self.name(),
                kind: ctx.kind(),
            }),
        }
    }

    fn failure_message(&self, ctx: &FieldContext<'_>, _tag: &Tag) -> String {
        format!("{} required.", ctx.display_name())
    }
}

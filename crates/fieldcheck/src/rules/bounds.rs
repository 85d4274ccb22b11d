//! Shared numeric comparison for `max` and `min`.

use std::cmp::Ordering;
use std::str::FromStr;

use tracing::warn;

use crate::context::FieldContext;
use crate::error::{Result, ValidationError};
use crate::tags::Tag;
use crate::value::FieldValue;

/// Which side of the bound a value must sit on to pass. Equal always passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Limit {
    Upper,
    Lower,
}

impl Limit {
    fn allows(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, Some(Ordering::Equal)) => true,
            (Limit::Upper, Some(Ordering::Less)) => true,
            (Limit::Lower, Some(Ordering::Greater)) => true,
            _ => false,
        }
    }
}

/// Compare the field's numeric value with the tag's bound.
///
/// The bound is parsed in the field's own kind category. A bound that does
/// not parse is not an error; the test simply does not pass.
pub(crate) fn test_bound(
    rule: &'static str,
    limit: Limit,
    ctx: &FieldContext<'_>,
    tag: &Tag,
) -> Result<bool> {
    let ordering = match ctx.value() {
        FieldValue::Int(v) => parse_bound::<i64>(rule, ctx, tag).map(|b| v.partial_cmp(&b)),
        FieldValue::Uint(v) => parse_bound::<u64>(rule, ctx, tag).map(|b| v.partial_cmp(&b)),
        FieldValue::Float(v) => parse_bound::<f64>(rule, ctx, tag).map(|b| v.partial_cmp(&b)),
        _ => {
            return Err(ValidationError::UnexpectedType {
                rule,
                kind: ctx.kind(),
            })
        }
    };

    Ok(ordering.is_some_and(|o| limit.allows(o)))
}

fn parse_bound<T>(rule: &'static str, ctx: &FieldContext<'_>, tag: &Tag) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match tag.value.parse::<T>() {
        Ok(bound) => Some(bound),
        Err(e) => {
            warn!(
                rule,
                field = ctx.meta().ident,
                value = %tag.value,
                error = %e,
                "rule argument does not parse; treating as failed"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_passes_both_limits() {
        assert!(Limit::Upper.allows(Some(Ordering::Equal)));
        assert!(Limit::Lower.allows(Some(Ordering::Equal)));
    }

    #[test]
    fn unordered_never_passes() {
        assert!(!Limit::Upper.allows(None));
        assert!(!Limit::Lower.allows(None));
    }

    #[test]
    fn direction() {
        assert!(Limit::Upper.allows(Some(Ordering::Less)));
        assert!(!Limit::Upper.allows(Some(Ordering::Greater)));
        assert!(Limit::Lower.allows(Some(Ordering::Greater)));
        assert!(!Limit::Lower.allows(Some(Ordering::Less)));
    }
}

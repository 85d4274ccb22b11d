//! # Rules
//!
//! A rule is a named, stateless predicate plus a message formatter. Every
//! rule implements the same two-method contract, so adding a rule never
//! touches dispatch:
//!
//! - [`Rule::test`] decides whether the field satisfies the tag. `Ok(true)`
//!   passes, `Ok(false)` is a validation failure, `Err` is a configuration
//!   error (wrong field kind for this rule).
//! - [`Rule::failure_message`] formats the human-readable failure.
//!
//! ## Registry
//!
//! [`Registry`] maps rule names to rules. It is built explicitly, usually
//! once at startup with [`Registry::builtin`], and passed by reference to
//! whatever validates. Registering a second rule under an existing name is
//! rejected.
//!
//! ## Built-in rules
//!
//! | Name | Kinds | Passes when |
//! |------|-------|-------------|
//! | `max` | int, uint, float | value <= bound |
//! | `min` | int, uint, float | value >= bound |
//! | `required` | text, reference | text non-empty; no nil along the reference chain |
//! | `maxlen` | text, reference | char count <= bound |
//! | `minlen` | text, reference | char count >= bound |
//!
//! ## Malformed arguments
//!
//! A tag value that does not parse as the rule's argument type (`max=abc`)
//! makes `test` return `Ok(false)` for every built-in rule, so the field
//! fails validation. The parse problem is logged at `warn`.

mod bounds;
mod length;
mod max;
mod min;
mod required;

use std::collections::BTreeMap;

use crate::context::FieldContext;
use crate::error::{Result, ValidationError};
use crate::tags::Tag;

pub use length::{MaxLen, MinLen};
pub use max::Max;
pub use min::Min;
pub use required::Required;

pub trait Rule: Send + Sync {
    /// The tag key this rule answers to.
    fn name(&self) -> &'static str;

    fn test(&self, ctx: &FieldContext<'_>, tag: &Tag) -> Result<bool>;

    fn failure_message(&self, ctx: &FieldContext<'_>, tag: &Tag) -> String;
}

/// Constructors for every built-in rule.
///
/// Adding a built-in rule means adding an entry here.
pub const BUILTIN_RULES: &[fn() -> Box<dyn Rule>] = &[max, min, required, maxlen, minlen];

fn max() -> Box<dyn Rule> {
    Box::new(Max)
}

fn min() -> Box<dyn Rule> {
    Box::new(Min)
}

fn required() -> Box<dyn Rule> {
    Box::new(Required)
}

fn maxlen() -> Box<dyn Rule> {
    Box::new(MaxLen)
}

fn minlen() -> Box<dyn Rule> {
    Box::new(MinLen)
}

#[derive(Default)]
pub struct Registry {
    rules: BTreeMap<&'static str, Box<dyn Rule>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every rule in [`BUILTIN_RULES`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for make in BUILTIN_RULES {
            let rule = make();
            let name = rule.name();
            // Built-in names are distinct, so this cannot collide.
            registry.rules.insert(name, rule);
        }
        registry
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) -> Result<()> {
        let name = rule.name();
        if self.rules.contains_key(name) {
            return Err(ValidationError::DuplicateRule(name.to_string()));
        }
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Builder-style [`Registry::register`].
    pub fn with(mut self, rule: impl Rule + 'static) -> Result<Self> {
        self.register(Box::new(rule))?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name).map(|rule| rule.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn name(&self) -> &'static str {
            "never"
        }

        fn test(&self, _ctx: &FieldContext<'_>, _tag: &Tag) -> Result<bool> {
            Ok(false)
        }

        fn failure_message(&self, ctx: &FieldContext<'_>, _tag: &Tag) -> String {
            format!("{} is never valid.", ctx.display_name())
        }
    }

    #[test]
    fn builtin_registry_has_expected_rules() {
        let registry = Registry::builtin();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["max", "maxlen", "min", "minlen", "required"]);
        assert_eq!(registry.len(), BUILTIN_RULES.len());
    }

    #[test]
    fn unknown_rule_returns_none() {
        let registry = Registry::builtin();
        assert!(registry.get("email").is_none());
        assert!(!registry.contains(""));
    }

    #[test]
    fn register_custom_rule() {
        let registry = Registry::builtin().with(AlwaysFails).unwrap();
        assert!(registry.contains("never"));
        assert_eq!(registry.get("never").unwrap().name(), "never");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = Registry::new();
        registry.register(Box::new(Max)).unwrap();

        let err = registry.register(Box::new(Max)).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateRule(ref n) if n == "max"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(format!("{:?}", registry), "{}");
    }
}

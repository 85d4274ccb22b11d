//! Records and their field descriptors.
//!
//! A [`Record`] describes itself as a list of [`Field`]s: static metadata
//! for each field plus its current value. This stands in for runtime
//! reflection; implementing it is usually a few lines per type:
//!
//! ```
//! use fieldcheck::{Field, FieldMeta, Record};
//!
//! struct Signup {
//!     user_name: String,
//!     age: u8,
//! }
//!
//! impl Record for Signup {
//!     fn fields(&self) -> Vec<Field> {
//!         vec![
//!             Field::new(FieldMeta::new("UserName", "required,maxlen=32"), &self.user_name),
//!             Field::new(FieldMeta::new("Age", "min=13,max=130"), self.age),
//!         ]
//!     }
//! }
//! ```

use crate::value::FieldValue;

/// Static description of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// The field identifier, used to derive a display name.
    pub ident: &'static str,

    /// Raw rule metadata, e.g. `"max=10,required"`. Empty when absent.
    pub tags: &'static str,

    /// Display-name metadata kept apart from the rule tags.
    pub display_name: Option<&'static str>,
}

impl FieldMeta {
    pub const fn new(ident: &'static str, tags: &'static str) -> Self {
        Self {
            ident,
            tags,
            display_name: None,
        }
    }

    pub const fn with_display_name(mut self, name: &'static str) -> Self {
        self.display_name = Some(name);
        self
    }
}

/// One field of a record instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub meta: FieldMeta,
    pub value: FieldValue,
}

impl Field {
    pub fn new(meta: FieldMeta, value: impl Into<FieldValue>) -> Self {
        Self {
            meta,
            value: value.into(),
        }
    }
}

pub trait Record {
    fn fields(&self) -> Vec<Field>;
}

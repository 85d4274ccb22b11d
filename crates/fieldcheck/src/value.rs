//! Field value types.
//!
//! Rules never inspect a record directly. Each field's current value is
//! lowered into a [`FieldValue`], a closed set of kinds that rules match on.
//! Every integer width folds into `Int`/`Uint` and both float widths into
//! `Float`, so a rule handles one branch per kind category.

use std::fmt;

/// The kind category of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Signed integer of any width (`i8` through `i64`, `isize`)
    Int,
    /// Unsigned integer of any width (`u8` through `u64`, `usize`)
    Uint,
    /// Floating point (`f32`, `f64`)
    Float,
    /// Text (`String`, `&str`)
    Text,
    /// Optional or reference value, possibly nested
    Ref,
    /// Boolean
    Bool,
    /// Anything else; carries no comparable payload
    Other,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Int => "signed integer",
            FieldKind::Uint => "unsigned integer",
            FieldKind::Float => "float",
            FieldKind::Text => "text",
            FieldKind::Ref => "reference",
            FieldKind::Bool => "bool",
            FieldKind::Other => "opaque",
        };
        f.write_str(name)
    }
}

/// Runtime representation of a field's current value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),

    /// One level of indirection. `None` is an absent (nil) reference.
    ///
    /// `Option<Option<String>>` lowers to `Ref(Some(Ref(Some(Text(..)))))`.
    Ref(Option<Box<FieldValue>>),

    Bool(bool),

    /// A value of a kind no rule understands, labelled with its type name.
    Other(&'static str),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Uint(_) => FieldKind::Uint,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Ref(_) => FieldKind::Ref,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Other(_) => FieldKind::Other,
        }
    }

    /// A `Ref` that points at nothing.
    pub fn nil() -> Self {
        FieldValue::Ref(None)
    }

    /// Wrap a value in one level of indirection.
    pub fn reference(inner: impl Into<FieldValue>) -> Self {
        FieldValue::Ref(Some(Box::new(inner.into())))
    }

    /// Follow every level of indirection.
    ///
    /// Returns `None` if any level is nil, otherwise the innermost
    /// non-reference value. Non-reference values return themselves.
    pub fn deref_all(&self) -> Option<&FieldValue> {
        let mut current = self;
        loop {
            match current {
                FieldValue::Ref(Some(inner)) => current = inner,
                FieldValue::Ref(None) => return None,
                other => return Some(other),
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from_widths {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(v: $t) -> Self {
                    FieldValue::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_from_widths!(Int as i64: i8, i16, i32, i64, isize);
impl_from_widths!(Uint as u64: u8, u16, u32, u64, usize);
impl_from_widths!(Float as f64: f32, f64);

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(v: &String) -> Self {
        FieldValue::Text(v.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        FieldValue::Ref(v.map(|inner| Box::new(inner.into())))
    }
}

impl<T: Into<FieldValue>> From<Box<T>> for FieldValue {
    fn from(v: Box<T>) -> Self {
        FieldValue::reference(*v)
    }
}

//! # fieldcheck
//!
//! Declarative, tag-driven field validation. Each field of a record carries
//! a metadata string such as `"required,maxlen=32"`; every entry names a
//! rule and its argument. The engine parses the tags, looks each rule up in
//! a [`Registry`] and tests the field's current value against it.
//!
//! Failures do not stop evaluation. They accumulate as human-readable
//! messages in a shared, thread-safe [`FailureSink`], so fields can be
//! validated concurrently. Configuration problems (unknown rule names, rules
//! applied to the wrong kind of field) are returned as [`ValidationError`]s.
//!
//! ## Layers
//!
//! - [`tags`]: parsing raw metadata into an ordered [`TagCollection`]
//! - [`context`]: the per-field [`FieldContext`] rules see
//! - [`rules`]: the [`Rule`] contract, the [`Registry`] and built-in rules
//! - [`dispatch`]: connecting one tag to its rule
//! - [`validator`]: the record-level driver
//!
//! ## Usage
//!
//! ```
//! use fieldcheck::{Field, FieldMeta, Record, Validator};
//!
//! struct Order {
//!     quantity: u32,
//!     note: Option<String>,
//! }
//!
//! impl Record for Order {
//!     fn fields(&self) -> Vec<Field> {
//!         vec![
//!             Field::new(FieldMeta::new("Quantity", "min=1,max=10"), self.quantity),
//!             Field::new(FieldMeta::new("Note", "required"), self.note.clone()),
//!         ]
//!     }
//! }
//!
//! let report = Validator::builtin()
//!     .validate(&Order { quantity: 12, note: None })
//!     .unwrap();
//! assert_eq!(
//!     report.messages(),
//!     ["Quantity cannot be greater than 10.", "Note required."]
//! );
//! ```

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod record;
pub mod rules;
pub mod sink;
pub mod tags;
pub mod validator;
pub mod value;

pub use config::EngineConfig;
pub use context::{format_field_name, FieldContext};
pub use dispatch::{dispatch, Outcome};
pub use error::{Result, ValidationError};
pub use record::{Field, FieldMeta, Record};
pub use rules::{Registry, Rule};
pub use sink::FailureSink;
pub use tags::{Tag, TagCollection, TagSyntax};
pub use validator::{Report, Validator};
pub use value::{FieldKind, FieldValue};

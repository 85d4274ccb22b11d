//! # Validator
//!
//! Walks every field of a [`Record`], builds a [`FieldContext`] per field and
//! runs its rule tags. All contexts of one run share a single
//! [`FailureSink`]; with `parallel` enabled the fields are fanned out across
//! the rayon pool and append to that sink concurrently.
//!
//! A configuration error (unknown rule, rule applied to the wrong kind of
//! field) aborts the run and is returned instead of a [`Report`].

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug_span, info};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::context::FieldContext;
use crate::error::Result;
use crate::record::{Field, Record};
use crate::rules::Registry;
use crate::sink::FailureSink;
use crate::tags::TagSyntax;

/// Failures collected by one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub run_id: Uuid,
    pub messages: Vec<String>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `Ok(())` when valid, otherwise the failure messages.
    pub fn ensure_valid(self) -> std::result::Result<(), Vec<String>> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.messages)
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug)]
pub struct Validator {
    registry: Registry,
    syntax: TagSyntax,
    parallel: bool,
}

impl Validator {
    pub fn new(registry: Registry, config: &EngineConfig) -> Result<Self> {
        Ok(Self {
            registry,
            syntax: config.syntax()?,
            parallel: config.parallel,
        })
    }

    /// Built-in rules with default configuration.
    pub fn builtin() -> Self {
        Self {
            registry: Registry::builtin(),
            syntax: TagSyntax::default(),
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn syntax(&self) -> &TagSyntax {
        &self.syntax
    }

    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> Result<Report> {
        let fields = record.fields();
        let sink = FailureSink::new();
        let run_id = Uuid::new_v4();
        let _span = debug_span!("validate", %run_id, fields = fields.len()).entered();

        if self.parallel {
            fields
                .par_iter()
                .try_for_each(|field| self.validate_field(field, &sink).map(|_| ()))?;
        } else {
            for field in &fields {
                self.validate_field(field, &sink)?;
            }
        }

        let messages = sink.into_messages();
        info!(%run_id, failures = messages.len(), "validation finished");
        Ok(Report { run_id, messages })
    }

    /// Validate a single field against a caller-owned sink.
    ///
    /// Use this to fan fields out yourself; every call for the same run
    /// should share one sink.
    pub fn validate_field(&self, field: &Field, sink: &FailureSink) -> Result<usize> {
        FieldContext::new(field, sink, &self.syntax).validate(&self.registry)
    }
}

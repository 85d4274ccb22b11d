//! Shared failure collection for one validation run.
//!
//! Every [`FieldContext`](crate::context::FieldContext) of a run borrows the
//! same sink, possibly from several threads at once. All mutation happens
//! under a single write lock, so concurrent appends are never lost.
//! Message order across fields follows completion order and is not stable.

use parking_lot::RwLock;

use crate::tags::Tag;

#[derive(Debug, Default)]
pub struct FailureSink {
    messages: RwLock<Vec<String>>,
}

impl FailureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure message, flagging `tag` as failed if one is given.
    pub fn record(&self, tag: Option<&Tag>, message: impl Into<String>) {
        let mut messages = self.messages.write();
        if let Some(tag) = tag {
            tag.mark_failed();
        }
        messages.push(message.into());
    }

    pub fn has_failed(&self, tag: &Tag) -> bool {
        let _guard = self.messages.read();
        tag.failed_flag()
    }

    /// Snapshot of the messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.read().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages.into_inner()
    }
}

//! Feedback: where user-facing status lines go.
//!
//! Devices and the console session never print directly; they hand each line
//! to a [`Feedback`] sink. The binary wires a stdout sink, tests use
//! [`MemoryFeedback`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sink for human-readable status lines.
pub trait Feedback: Send + Sync {
    /// Emit one line (without trailing newline).
    fn emit(&self, line: &str);
}

/// Shared handle to a feedback sink, cloned into every device.
pub type SharedFeedback = Arc<dyn Feedback>;

/// Feedback sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryFeedback {
    lines: Mutex<Vec<String>>,
}

impl MemoryFeedback {
    /// Create an empty sink wrapped in an [`Arc`], ready to be shared.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of every line emitted so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Drain and return every line emitted so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    /// Whether any emitted line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lock().iter().any(|line| line.contains(needle))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Feedback for MemoryFeedback {
    fn emit(&self, line: &str) {
        self.lock().push(line.to_string());
    }
}

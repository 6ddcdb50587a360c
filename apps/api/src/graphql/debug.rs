//! Resolver debug log
//!
//! Built once from configuration and handed to the schema as data. When
//! enabled, resolvers announce each operation and its arguments before
//! calling upstream.

use std::fmt::Debug;

use tracing::info;

/// Per-operation diagnostic logger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugLog {
    enabled: bool,
}

impl DebugLog {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Record a resolver invocation
    pub fn operation(&self, name: &str, args: impl Debug) {
        if self.enabled {
            info!(operation = name, args = ?args, "Resolving");
        }
    }
}

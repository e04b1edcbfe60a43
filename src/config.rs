//! History tracking configuration.

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration for the history navigator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// How many recent cursor-history entries to inspect when suppressing
    /// duplicate cursor locations. `null` scans the full history, which
    /// means a location ever recorded is never recorded again; a bounded
    /// window keeps the per-event cost constant on long sessions.
    #[serde(default = "default_cursor_dedup_window")]
    pub cursor_dedup_window: Option<usize>,
}

fn default_cursor_dedup_window() -> Option<usize> {
    None
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            cursor_dedup_window: default_cursor_dedup_window(),
        }
    }
}

impl HistoryConfig {
    /// Parse a configuration from its JSON representation
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid history configuration")
    }
}

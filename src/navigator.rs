//! History navigator: two independent logs plus navigation dispatch.
//!
//! - Edit history records a location on every document edit, unconditionally.
//! - Cursor history records cursor movements, suppressing locations already
//!   present (within the configured dedup window).
//!
//! The logs share no state and are never merged. All methods take `&mut
//! self` and run synchronously; callers serialize input through their event
//! loop, so no locking is needed.

use crate::commands::NavigationCommand;
use crate::config::HistoryConfig;
use crate::event::EditorEvent;
use crate::history::HistoryLog;
use crate::host::{move_to, HostEditor};
use crate::location::Location;
use anyhow::Result;
use tracing::{debug, warn};

/// Owns the edit and cursor history logs for one editor integration.
///
/// Construct one per integration; instances are fully independent.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    edit_history: HistoryLog,
    cursor_history: HistoryLog,
    config: HistoryConfig,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Dispatch an inbound host notification to the matching log
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::ActiveDocumentChanged { doc } => {
                // Listener re-subscription is the host's job; nothing to record
                debug!(doc = %doc.display(), "active document changed");
            }
            EditorEvent::DocumentEdited { doc, pos } => {
                self.record_edit(Location::new(doc, pos));
            }
            EditorEvent::CursorMoved { doc, pos } => {
                self.record_cursor(Location::new(doc, pos));
            }
        }
    }

    /// Record an edit location. Every edit is recorded, duplicates included.
    pub fn record_edit(&mut self, location: Location) {
        debug!(location = %location, "recording edit location");
        self.edit_history.record(location);
    }

    /// Record a cursor location, unless an equal one is already in the log.
    ///
    /// The duplicate check keeps navigation replay from re-recording the
    /// positions it visits. Returns whether the location was recorded.
    pub fn record_cursor(&mut self, location: Location) -> bool {
        let recorded = self
            .cursor_history
            .record_unique(location, self.config.cursor_dedup_window);
        if recorded {
            debug!(len = self.cursor_history.len(), "recorded cursor location");
        }
        recorded
    }

    /// Walk the matching log one step, returning the new current location.
    ///
    /// On an empty log or at a boundary this is a silent no-op returning
    /// `None`; the log cursor does not move.
    pub fn navigate(&mut self, command: NavigationCommand) -> Option<Location> {
        let target = match command {
            NavigationCommand::PreviousEdit => self.edit_history.previous(),
            NavigationCommand::NextEdit => self.edit_history.next(),
            NavigationCommand::PreviousCursorChange => self.cursor_history.previous(),
            NavigationCommand::NextCursorChange => self.cursor_history.next(),
        };
        target.cloned()
    }

    /// Navigate and apply the result to the host editor.
    ///
    /// A no-op navigation (empty log, at a boundary) returns `Ok(())`. An
    /// activation failure is logged and returned as a recoverable error;
    /// the host's cursor and the logs are left unchanged.
    pub async fn execute<H>(&mut self, command: NavigationCommand, host: &mut H) -> Result<()>
    where
        H: HostEditor + ?Sized,
    {
        let Some(target) = self.navigate(command) else {
            return Ok(());
        };
        if let Err(err) = move_to(host, &target).await {
            warn!(command = %command, error = %err, "navigation could not reach target");
            return Err(err);
        }
        Ok(())
    }

    pub fn edit_history(&self) -> &HistoryLog {
        &self.edit_history
    }

    pub fn cursor_history(&self) -> &HistoryLog {
        &self.cursor_history
    }
}

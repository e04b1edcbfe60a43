//! Boundary toward the host editor.
//!
//! The host owns documents, the active editor, and the event plumbing; the
//! core only needs three capabilities: ask which document is active, make a
//! document active (which may open a file, hence async), and place the
//! cursor. Tests implement [`HostEditor`] with an in-memory fake.

use crate::location::{Location, Position};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// The capabilities the navigator needs from the host editor
#[async_trait]
pub trait HostEditor {
    /// Path of the document currently shown in the active editor
    fn active_document(&self) -> Option<PathBuf>;

    /// Make `doc` the active document, opening it if necessary.
    ///
    /// Completes once the document is active; fails if the document cannot
    /// be activated (e.g., the file no longer exists).
    async fn activate_document(&mut self, doc: &Path) -> Result<()>;

    /// Place the cursor in the active editor
    fn set_cursor(&mut self, pos: Position);
}

/// Move the editor's focus to `location`.
///
/// If the location's document is already active the cursor is set directly;
/// otherwise the document is activated first and the cursor is set once
/// activation completes. On activation failure the cursor is never touched
/// and the error is returned to the caller.
pub async fn move_to<H>(host: &mut H, location: &Location) -> Result<()>
where
    H: HostEditor + ?Sized,
{
    if host.active_document().as_deref() == Some(location.doc.as_path()) {
        host.set_cursor(location.pos);
        return Ok(());
    }

    host.activate_document(&location.doc)
        .await
        .with_context(|| format!("failed to activate document {}", location.doc.display()))?;
    host.set_cursor(location.pos);
    Ok(())
}

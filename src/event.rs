//! Inbound notifications from the host editor.

use crate::location::Position;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A notification delivered by the host editor's event plumbing.
///
/// The host is responsible for re-subscribing its document/editor listeners
/// as the active document changes; the core only consumes the resulting
/// stream of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// A different document became active in the editor
    ActiveDocumentChanged { doc: PathBuf },

    /// The text of `doc` was modified; `pos` is the cursor at edit time
    DocumentEdited { doc: PathBuf, pos: Position },

    /// The cursor moved within `doc`
    CursorMoved { doc: PathBuf, pos: Position },
}

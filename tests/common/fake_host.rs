// FakeHost - in-memory host editor for exercising the HostEditor boundary

use anyhow::{bail, Result};
use async_trait::async_trait;
use nav_history::{HostEditor, Position};
use std::path::{Path, PathBuf};

/// In-memory stand-in for the host editor.
///
/// Holds a set of openable documents, the currently active one, and the
/// cursor position last applied. Activation of an unknown document fails;
/// with `stall_activation` set, activation never completes.
pub struct FakeHost {
    /// Documents the host can activate
    pub documents: Vec<PathBuf>,
    /// Currently active document, if any
    pub active: Option<PathBuf>,
    /// Cursor position last applied via `set_cursor`
    pub cursor: Option<Position>,
    /// Every activation request received, in order
    pub activations: Vec<PathBuf>,
    /// When set, `activate_document` pends forever
    pub stall_activation: bool,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            active: None,
            cursor: None,
            activations: Vec::new(),
            stall_activation: false,
        }
    }

    /// A host that knows the given documents, with the first one active
    pub fn with_documents(paths: &[&str]) -> Self {
        let documents: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
        let active = documents.first().cloned();
        Self {
            documents,
            active,
            ..Self::new()
        }
    }
}

#[async_trait]
impl HostEditor for FakeHost {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    async fn activate_document(&mut self, doc: &Path) -> Result<()> {
        self.activations.push(doc.to_path_buf());
        if self.stall_activation {
            std::future::pending::<()>().await;
        }
        if !self.documents.iter().any(|d| d == doc) {
            bail!("no such document: {}", doc.display());
        }
        // Activation takes at least one trip through the executor
        tokio::task::yield_now().await;
        self.active = Some(doc.to_path_buf());
        Ok(())
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = Some(pos);
    }
}

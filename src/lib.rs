//! Back/forward navigation history for editor integrations.
//!
//! The crate keeps two independent append-only logs of locations:
//! - Edit history: where the text was last modified (every edit is recorded)
//! - Cursor history: where the cursor has been (duplicates are suppressed)
//!
//! A [`HistoryNavigator`] owns both logs and turns inbound editor
//! notifications ([`EditorEvent`]) into recorded entries. Four navigation
//! commands walk the logs back and forward; executing a command drives the
//! host editor through the async [`HostEditor`] boundary, activating the
//! target document first when it is not the active one.
//!
//! The core is synchronous and single-threaded; only document activation is
//! an async step, awaited to completion before the cursor is placed.

pub mod commands;
pub mod config;
pub mod event;
pub mod history;
pub mod host;
pub mod location;
pub mod navigator;

pub use commands::{builtin_commands, Command, NavigationCommand};
pub use config::HistoryConfig;
pub use event::EditorEvent;
pub use history::HistoryLog;
pub use host::{move_to, HostEditor};
pub use location::{Location, Position};
pub use navigator::HistoryNavigator;

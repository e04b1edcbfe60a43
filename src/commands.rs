//! Navigation commands a host can bind to its UI (toolbar, palette, keys).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four (log, direction) navigation operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationCommand {
    PreviousEdit,
    NextEdit,
    PreviousCursorChange,
    NextCursorChange,
}

impl NavigationCommand {
    /// Stable identifier, suitable for keybinding maps
    pub fn name(&self) -> &'static str {
        match self {
            Self::PreviousEdit => "previous_edit",
            Self::NextEdit => "next_edit",
            Self::PreviousCursorChange => "previous_cursor_change",
            Self::NextCursorChange => "next_cursor_change",
        }
    }

    /// Parse a stable identifier back into a command
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "previous_edit" => Some(Self::PreviousEdit),
            "next_edit" => Some(Self::NextEdit),
            "previous_cursor_change" => Some(Self::PreviousCursorChange),
            "next_cursor_change" => Some(Self::NextCursorChange),
            _ => None,
        }
    }

    pub fn all() -> [NavigationCommand; 4] {
        [
            Self::PreviousEdit,
            Self::NextEdit,
            Self::PreviousCursorChange,
            Self::NextCursorChange,
        ]
    }
}

impl fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A command descriptor for host command palettes and toolbars
#[derive(Debug, Clone)]
pub struct Command {
    /// Display name (e.g., "Go to Previous Edit")
    pub name: String,
    /// Command description
    pub description: String,
    /// The navigation operation to trigger
    pub command: NavigationCommand,
}

/// All navigation commands with their display names and descriptions
pub fn builtin_commands() -> Vec<Command> {
    vec![
        Command {
            name: "Go to Previous Edit".to_string(),
            description: "Go back in edit history".to_string(),
            command: NavigationCommand::PreviousEdit,
        },
        Command {
            name: "Go to Next Edit".to_string(),
            description: "Go forward in edit history".to_string(),
            command: NavigationCommand::NextEdit,
        },
        Command {
            name: "Go to Previous Cursor Change".to_string(),
            description: "Go back in cursor position history".to_string(),
            command: NavigationCommand::PreviousCursorChange,
        },
        Command {
            name: "Go to Next Cursor Change".to_string(),
            description: "Go forward in cursor position history".to_string(),
            command: NavigationCommand::NextCursorChange,
        },
    ]
}

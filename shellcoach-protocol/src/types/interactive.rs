//! Interactive-mode state types
//!
//! Describes which full-screen program (if any) currently owns terminal
//! rendering, and whether a confirmation prompt is pending. The interpreter
//! owns the state machine; these types are the snapshot the UI consumes.

use serde::{Deserialize, Serialize};

/// Full-screen program currently owning terminal rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum InteractiveMode {
    /// The shell owns the terminal
    #[default]
    None,
    /// A pager (man, less, more)
    Pager,
    /// A vim-family editor (vim, vi, nvim)
    EditorVim,
    /// The nano editor
    EditorNano,
    /// A process monitor (top, htop)
    Monitor,
}

impl InteractiveMode {
    /// Check whether a full-screen program is active
    pub fn is_active(&self) -> bool {
        !matches!(self, InteractiveMode::None)
    }
}

/// Kind of confirmation prompt pending in the terminal
///
/// Independent of [`InteractiveMode`]: a confirmation prompt can appear while
/// no pager or editor is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PromptKind {
    /// No prompt pending
    #[default]
    None,
    /// A yes/no confirmation such as `[Y/n]` or `(yes/no)`
    YesNo,
    /// A free-text question
    FreeText,
}

impl PromptKind {
    /// Check whether a prompt is pending
    pub fn is_pending(&self) -> bool {
        !matches!(self, PromptKind::None)
    }
}

/// Snapshot of the interactive-mode tracker state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct InteractiveSnapshot {
    /// Which full-screen program owns the terminal
    pub mode: InteractiveMode,
    /// Whether a confirmation prompt is pending
    pub prompt: PromptKind,
    /// Captured question text when a prompt is pending, empty otherwise
    pub question: String,
}

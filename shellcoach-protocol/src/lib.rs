//! shellcoach-protocol: Shared state definitions for the terminal output
//! interpreter and the presentation layer.
//!
//! This crate defines the data model the interpreter derives from raw PTY
//! output (interactive-mode snapshots, assistant activity, conversation
//! rounds) and the event type it emits for the UI to render.

pub mod events;
pub mod types;

// Re-export main types at crate root
pub use events::InterpreterEvent;
pub use types::{
    now_millis, ActivityEvent, ActivityKind, ConversationRound, InteractiveMode,
    InteractiveSnapshot, PromptKind, TaskItem, TaskStatus, ToolKind,
};

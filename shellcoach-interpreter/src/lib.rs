//! Terminal output interpretation for shellcoach
//!
//! This crate consumes the continuous, unstructured text stream a shell
//! session produces inside a pseudo-terminal and incrementally derives
//! structured state from it, without access to the shell's internals.
//!
//! # Architecture
//!
//! Three independent sub-machines observe every output chunk:
//!
//! 1. **Escape normalizer** ([`ansi`]): strips CSI escape sequences before
//!    any pattern matching. Stateless.
//!
//! 2. **Interactive-mode tracker** ([`interactive`]): classifies whether a
//!    full-screen program (pager, editor, monitor) owns the terminal and
//!    whether a confirmation prompt is pending. Mode entry comes from the
//!    submitted command, never from output text.
//!
//! 3. **Assistant session tracker** ([`assistant`]): detects entry/exit of
//!    an AI-assistant sub-session and builds a hierarchical activity log
//!    (conversation rounds, task items, tool-use events) from its prose.
//!
//! All classification is heuristic and best-effort: unmatched chunks leave
//! state unchanged, and misclassification self-corrects on the next
//! recognizable signal.
//!
//! # Usage
//!
//! ```rust
//! use shellcoach_interpreter::OutputInterpreter;
//!
//! let mut interpreter = OutputInterpreter::new();
//!
//! interpreter.on_command_submitted("less README.md");
//! for event in interpreter.on_output_chunk("\x1b[2J(END)") {
//!     println!("{:?}", event);
//! }
//! ```

pub mod ansi;
pub mod assistant;
pub mod interactive;
pub mod interpreter;
pub mod patterns;

pub use ansi::strip_csi;
pub use assistant::{AssistantTracker, TrackerConfig};
pub use interactive::{launch_mode, InteractiveTracker};
pub use interpreter::OutputInterpreter;

// Re-export protocol types for convenience
pub use shellcoach_protocol::{
    ActivityEvent, ActivityKind, ConversationRound, InteractiveMode, InteractiveSnapshot,
    InterpreterEvent, PromptKind, TaskItem, TaskStatus, ToolKind,
};

//! Assistant session tracking
//!
//! Detects entry and exit of an AI-assistant sub-session nested inside the
//! shell and builds a hierarchical activity log from the assistant's
//! streamed prose.
//!
//! # Detection order
//!
//! Steps run per normalized chunk, each returning early on match:
//!
//! 1. **Session start**: welcome banner glyph or product name.
//! 2. Chunks while inactive carry no assistant signal and are discarded.
//! 3. **Explicit end**: farewell text.
//! 4. **Inferred end**: shell-prompt shape not mentioning the assistant,
//!    only after some activity has been recorded (the assistant can print
//!    shell-like characters inside code output).
//! 5. **New round**: user-prompt echo (`> ...`).
//! 6. **Task-list update**: full replace of the round's task list.
//! 7. **Thinking**: spinner glyphs or the word "Thinking".
//! 8. **File tools**: Read/Write/Edit anchored to a path, before generic
//!    verbs so status lines like "Read 138 lines" never match.
//! 9. **Generic tools**: Bash/Glob/Grep/WebFetch/WebSearch/Task.
//! 10. **Tool completion**: checkmark while a tool invocation is pending.
//!
//! Lifecycle signals are checked before content parsing so a farewell is
//! never also parsed as a new round, and path-anchored matches precede
//! generic-verb matches.

mod tracker;

pub use tracker::{AssistantTracker, TrackerConfig};

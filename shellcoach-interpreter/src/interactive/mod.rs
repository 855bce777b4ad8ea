//! Interactive-mode tracking
//!
//! Classifies whether a full-screen program (pager, editor, monitor) owns
//! the terminal and whether a confirmation prompt is pending.
//!
//! Mode *entry* is never inferred from output: when the user submits a
//! command it is matched against a fixed launch table and the mode is set
//! synchronously, before any output arrives. Output is only consulted for
//! confirmation prompts, pager continuation, and shell-prompt return.
//!
//! The classifier is best-effort by design: false negatives (staying in a
//! mode one chunk too long) only delay UI feedback, while false positives
//! would show visibly wrong state, so the rules prefer the former.

mod command;
mod tracker;

pub use command::launch_mode;
pub use tracker::InteractiveTracker;

//! Interpreter-to-UI event types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ActivityEvent, InteractiveSnapshot, TaskItem};

/// State-change events emitted by the interpreter for the presentation layer
///
/// Each arriving output chunk may produce zero or more of these. Ordering
/// within one chunk follows the tracker evaluation order; across chunks it
/// follows delivery order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum InterpreterEvent {
    /// Interactive mode or prompt state changed
    InteractiveChanged { snapshot: InteractiveSnapshot },

    /// An assistant session was detected in the output stream
    SessionStarted {
        /// Wall-clock detection time, milliseconds since the Unix epoch
        timestamp: u64,
    },

    /// The assistant session ended (explicit farewell or inferred shell return)
    SessionEnded,

    /// A new conversation round began from a user-prompt echo
    RoundStarted { round_id: Uuid, summary: String },

    /// The active round's task list was replaced wholesale
    TasksReplaced { tasks: Vec<TaskItem> },

    /// An activity event was recorded
    Activity { event: ActivityEvent },
}

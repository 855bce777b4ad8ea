//! Core data types shared between the interpreter and the UI

pub mod assistant;
pub mod interactive;

pub use assistant::{
    now_millis, ActivityEvent, ActivityKind, ConversationRound, TaskItem, TaskStatus, ToolKind,
};
pub use interactive::{InteractiveMode, InteractiveSnapshot, PromptKind};

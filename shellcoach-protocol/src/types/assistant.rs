//! Assistant session data model
//!
//! Hierarchical activity structures derived from the AI coding assistant's
//! streamed prose: conversation rounds own task items, task items and rounds
//! own activity events. All timestamps are wall-clock capture time at
//! detection, not the assistant's own clock.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Milliseconds since the Unix epoch at the time of the call
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Tools the assistant is known to invoke (closed set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToolKind {
    Read,
    Write,
    Edit,
    Bash,
    Glob,
    Grep,
    WebFetch,
    WebSearch,
    Task,
    TodoWrite,
}

impl ToolKind {
    /// The tool's display name as it appears in assistant output
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Read => "Read",
            ToolKind::Write => "Write",
            ToolKind::Edit => "Edit",
            ToolKind::Bash => "Bash",
            ToolKind::Glob => "Glob",
            ToolKind::Grep => "Grep",
            ToolKind::WebFetch => "WebFetch",
            ToolKind::WebSearch => "WebSearch",
            ToolKind::Task => "Task",
            ToolKind::TodoWrite => "TodoWrite",
        }
    }
}

/// Kind of a single observed assistant activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityKind {
    /// Spinner or explicit thinking indicator
    Thinking,
    /// A tool invocation was observed
    ToolStart,
    /// The pending tool invocation completed
    ToolComplete,
    /// Prose response text
    Response,
    /// An error surfaced in the output
    Error,
}

/// One observed assistant activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEvent {
    /// What happened
    pub kind: ActivityKind,
    /// Which tool, when the activity is tool related
    pub tool: Option<ToolKind>,
    /// Human-readable description, when one could be captured
    pub description: Option<String>,
    /// Wall-clock capture time, milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl ActivityEvent {
    /// Create an event stamped with the current wall-clock time
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            kind,
            tool: None,
            description: None,
            timestamp: now_millis(),
        }
    }

    /// Set the tool (builder pattern)
    pub fn with_tool(mut self, tool: ToolKind) -> Self {
        self.tool = Some(tool);
        self
    }

    /// Set the description (builder pattern)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Status of one task item in the assistant's own todo list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Parse a status keyword as printed by the assistant
    /// (`pending`, `in_progress`, `completed`; case-insensitive)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "pending" => Some(TaskStatus::Pending),
            "in_progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

/// One unit of work the assistant tracks via its todo-list convention
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskItem {
    /// Task text as printed by the assistant
    pub content: String,
    /// Current status; at most one task per round is InProgress
    pub status: TaskStatus,
    /// Activities attributed to this task
    pub activities: Vec<ActivityEvent>,
    /// UI collapse flag
    pub collapsed: bool,
}

impl TaskItem {
    /// Create a task with no recorded activity
    pub fn new(content: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            content: content.into(),
            status,
            activities: Vec::new(),
            collapsed: false,
        }
    }
}

/// One user-prompt-to-response cycle of the assistant session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationRound {
    /// Stable identifier for UI addressing
    pub id: Uuid,
    /// Short summary of the user prompt that started the round
    pub prompt_summary: String,
    /// Wall-clock creation time, milliseconds since the Unix epoch
    pub timestamp: u64,
    /// The assistant's task list as last reported during this round
    pub tasks: Vec<TaskItem>,
    /// Activities not attributed to any task
    pub activities: Vec<ActivityEvent>,
    /// UI collapse flag
    pub collapsed: bool,
}

impl ConversationRound {
    /// Create an empty round for the given prompt summary
    pub fn new(prompt_summary: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt_summary: prompt_summary.into(),
            timestamp: now_millis(),
            tasks: Vec::new(),
            activities: Vec::new(),
            collapsed: false,
        }
    }

    /// The task currently marked in-progress, if any
    pub fn active_task(&self) -> Option<&TaskItem> {
        self.tasks.iter().find(|t| t.status == TaskStatus::InProgress)
    }

    /// Mutable access to the in-progress task, if any
    pub fn active_task_mut(&mut self) -> Option<&mut TaskItem> {
        self.tasks
            .iter_mut()
            .find(|t| t.status == TaskStatus::InProgress)
    }
}

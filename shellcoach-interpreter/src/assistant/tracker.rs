//! Assistant session state machine

use std::collections::VecDeque;

use tracing::{debug, trace};
use uuid::Uuid;

use shellcoach_protocol::{
    now_millis, ActivityEvent, ActivityKind, ConversationRound, InterpreterEvent, TaskItem,
    TaskStatus, ToolKind,
};

use crate::ansi::strip_csi;
use crate::patterns::{
    self, clip, ellipsized, ASSISTANT_BANNER_GLYPH, ASSISTANT_FAREWELL, ASSISTANT_NAME,
    ASSISTANT_NAME_SHORT, CHECKMARK_CHARS, GENERIC_TOOLS, PATH_TOOLS, SPINNER_CHARS,
    TASK_LIST_ITEM, USER_PROMPT_ECHO,
};

/// Most recent events kept in the flat activity log
const FLAT_LOG_CAP: usize = 100;

/// Maximum characters of a user prompt kept as the round summary
const SUMMARY_MAX: usize = 40;

/// Maximum characters of a task's content text
const TASK_CONTENT_MAX: usize = 60;

/// Maximum characters of a tool path or detail in event descriptions
const PATH_MAX: usize = 60;
const DETAIL_MAX: usize = 50;

/// Configuration for the assistant tracker
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Whether to log lifecycle and activity transitions
    pub log_transitions: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_transitions: true,
        }
    }
}

impl TrackerConfig {
    /// Enable or disable transition logging
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_transitions = enabled;
        self
    }
}

/// Tracks the lifecycle and activity of an AI-assistant sub-session.
///
/// Owns the full hierarchical structure (rounds, tasks, events) plus the
/// capped flat log; nothing outside the tracker mutates them.
#[derive(Debug, Default)]
pub struct AssistantTracker {
    active: bool,
    started_at: Option<u64>,
    current_activity: Option<ActivityEvent>,
    rounds: Vec<ConversationRound>,
    current_round: Option<Uuid>,
    history: VecDeque<ActivityEvent>,
    config: TrackerConfig,
}

impl AssistantTracker {
    /// Create a tracker with default configuration, session inactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with custom configuration
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ==================== Accessors ====================

    /// Whether an assistant session is currently active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Wall-clock start of the active session, if any
    pub fn session_started_at(&self) -> Option<u64> {
        self.started_at
    }

    /// The most recently recorded activity, if any
    pub fn current_activity(&self) -> Option<&ActivityEvent> {
        self.current_activity.as_ref()
    }

    /// Whether the assistant currently shows a thinking indicator
    pub fn is_thinking(&self) -> bool {
        matches!(
            self.current_activity,
            Some(ActivityEvent {
                kind: ActivityKind::Thinking,
                ..
            })
        )
    }

    /// The tool of the current activity, if it is tool related
    pub fn current_tool(&self) -> Option<ToolKind> {
        self.current_activity.as_ref().and_then(|a| a.tool)
    }

    /// All conversation rounds of the session, oldest first
    pub fn rounds(&self) -> &[ConversationRound] {
        &self.rounds
    }

    /// The round the tracker is currently attributing events to
    pub fn current_round(&self) -> Option<&ConversationRound> {
        let id = self.current_round?;
        self.rounds.iter().find(|r| r.id == id)
    }

    /// The in-progress task of the current round, if any
    pub fn active_task(&self) -> Option<&TaskItem> {
        self.current_round().and_then(|r| r.active_task())
    }

    /// The flat, time-ordered activity log (capped at the most recent 100)
    pub fn history(&self) -> &VecDeque<ActivityEvent> {
        &self.history
    }

    /// The last ten activities, newest first
    pub fn recent_activities(&self) -> Vec<ActivityEvent> {
        self.history.iter().rev().take(10).cloned().collect()
    }

    // ==================== Chunk Processing ====================

    /// Process one output chunk, returning an event when state changed.
    pub fn observe_chunk(&mut self, chunk: &str) -> Option<InterpreterEvent> {
        let clean = strip_csi(chunk);

        // Step 1: session start on the welcome banner
        if !self.active {
            if clean.contains(ASSISTANT_BANNER_GLYPH) || clean.contains(ASSISTANT_NAME) {
                self.start_session();
                return Some(InterpreterEvent::SessionStarted {
                    timestamp: self.started_at.unwrap_or(0),
                });
            }
            // Step 2: inactive chunks carry no assistant signal
            return None;
        }

        // Step 3: explicit farewell
        if clean.contains(ASSISTANT_FAREWELL) {
            self.end_session();
            return Some(InterpreterEvent::SessionEnded);
        }

        // Step 4: inferred exit. A shell-prompt shape that also mentions the
        // assistant is assumed to be assistant output (code samples can look
        // shell-like), and a session with no recorded activity never exits
        // this way.
        if patterns::is_shell_prompt(&clean)
            && !clean.contains(ASSISTANT_NAME_SHORT)
            && !self.history.is_empty()
        {
            self.end_session();
            return Some(InterpreterEvent::SessionEnded);
        }

        // Step 5: user-prompt echo starts a new round
        if let Some(caps) = USER_PROMPT_ECHO.captures(&clean) {
            let summary = ellipsized(caps[1].trim(), SUMMARY_MAX);
            return Some(self.start_round(summary));
        }

        // Step 6: task-list update replaces the round's tasks wholesale
        if clean.contains("TodoWrite") || (clean.contains("todo") && clean.contains("status")) {
            let tasks = parse_task_list(&clean);
            if !tasks.is_empty() {
                if let Some(event) = self.replace_tasks(tasks) {
                    return Some(event);
                }
            }
            // Zero pairs parsed: the previous task list stays intact and the
            // remaining rules get their turn.
        }

        // Step 7: spinner animation or explicit thinking indicator
        if SPINNER_CHARS.iter().any(|&c| clean.contains(c)) || clean.contains("Thinking") {
            let event = ActivityEvent::new(ActivityKind::Thinking);
            self.record(event.clone());
            return Some(InterpreterEvent::Activity { event });
        }

        // Step 8: file tools anchored to a path argument
        for (tool, verb, pattern) in PATH_TOOLS.iter() {
            if let Some(caps) = pattern.captures(&clean) {
                let path = clip(&caps[1], PATH_MAX);
                let event = ActivityEvent::new(ActivityKind::ToolStart)
                    .with_tool(*tool)
                    .with_description(format!("{}: {}", verb, path));
                self.record(event.clone());
                return Some(InterpreterEvent::Activity { event });
            }
        }

        // Step 9: generic tool table, first match wins
        for (tool, verb, pattern) in GENERIC_TOOLS.iter() {
            if let Some(caps) = pattern.captures(&clean) {
                let detail = caps.get(1).map(|m| clip(m.as_str().trim(), DETAIL_MAX));
                let description = match detail {
                    Some(d) if !d.is_empty() => format!("{}: {}", verb, d),
                    _ => verb.to_string(),
                };
                let event = ActivityEvent::new(ActivityKind::ToolStart)
                    .with_tool(*tool)
                    .with_description(description);
                self.record(event.clone());
                return Some(InterpreterEvent::Activity { event });
            }
        }

        // Step 10: a checkmark completes the pending tool invocation
        if CHECKMARK_CHARS.iter().any(|&c| clean.contains(c)) {
            if let Some(current) = &self.current_activity {
                if current.kind == ActivityKind::ToolStart {
                    let mut event =
                        ActivityEvent::new(ActivityKind::ToolComplete).with_description("Completed");
                    event.tool = current.tool;
                    self.record(event.clone());
                    return Some(InterpreterEvent::Activity { event });
                }
            }
        }

        None
    }

    // ==================== Lifecycle ====================

    fn start_session(&mut self) {
        self.active = true;
        self.started_at = Some(now_millis());
        self.current_activity = None;
        self.rounds.clear();
        self.current_round = None;
        self.history.clear();

        if self.config.log_transitions {
            debug!("assistant session started");
        }
    }

    fn end_session(&mut self) {
        self.active = false;
        self.started_at = None;
        self.current_activity = None;
        self.current_round = None;

        if self.config.log_transitions {
            debug!("assistant session ended");
        }
    }

    fn start_round(&mut self, summary: String) -> InterpreterEvent {
        let round = ConversationRound::new(summary.clone());
        let round_id = round.id;
        self.current_round = Some(round_id);
        self.rounds.push(round);

        if self.config.log_transitions {
            debug!(summary = %summary, "new conversation round");
        }

        InterpreterEvent::RoundStarted { round_id, summary }
    }

    fn replace_tasks(&mut self, tasks: Vec<TaskItem>) -> Option<InterpreterEvent> {
        let Some(round) = self.current_round_mut() else {
            trace!("task list update with no active round, dropped");
            return None;
        };
        round.tasks = tasks.clone();

        if self.config.log_transitions {
            debug!(count = tasks.len(), "task list replaced");
        }

        Some(InterpreterEvent::TasksReplaced { tasks })
    }

    /// Record an activity: always into the capped flat log, and into the
    /// in-progress task if one exists, else the active round's general list.
    /// With no active round the event lives only in the flat log.
    fn record(&mut self, event: ActivityEvent) {
        self.current_activity = Some(event.clone());

        self.history.push_back(event.clone());
        if self.history.len() > FLAT_LOG_CAP {
            self.history.pop_front();
        }

        if let Some(round) = self.current_round_mut() {
            if let Some(task) = round.active_task_mut() {
                task.activities.push(event);
            } else {
                round.activities.push(event);
            }
        }
    }

    fn current_round_mut(&mut self) -> Option<&mut ConversationRound> {
        let id = self.current_round?;
        self.rounds.iter_mut().find(|r| r.id == id)
    }

    // ==================== UI Control ====================

    /// Clear the current activity indicator without touching the logs
    pub fn clear_activity(&mut self) {
        self.current_activity = None;
    }

    /// Toggle the collapse flag of one round
    pub fn toggle_round_collapsed(&mut self, round_id: Uuid) {
        if let Some(round) = self.rounds.iter_mut().find(|r| r.id == round_id) {
            round.collapsed = !round.collapsed;
        }
    }

    /// Toggle the collapse flag of one task within a round
    pub fn toggle_task_collapsed(&mut self, round_id: Uuid, task_index: usize) {
        if let Some(round) = self.rounds.iter_mut().find(|r| r.id == round_id) {
            if let Some(task) = round.tasks.get_mut(task_index) {
                task.collapsed = !task.collapsed;
            }
        }
    }

    /// Collapse every round and task
    pub fn collapse_all_rounds(&mut self) {
        for round in &mut self.rounds {
            round.collapsed = true;
            for task in &mut round.tasks {
                task.collapsed = true;
            }
        }
    }

    /// Expand every round and task
    pub fn expand_all_rounds(&mut self) {
        for round in &mut self.rounds {
            round.collapsed = false;
            for task in &mut round.tasks {
                task.collapsed = false;
            }
        }
    }

    /// Reset to the initial state. Idempotent and immediate.
    pub fn reset(&mut self) {
        self.active = false;
        self.started_at = None;
        self.current_activity = None;
        self.rounds.clear();
        self.current_round = None;
        self.history.clear();
    }
}

/// Parse `[status] content` pairs from a task-list update chunk
fn parse_task_list(text: &str) -> Vec<TaskItem> {
    TASK_LIST_ITEM
        .captures_iter(text)
        .filter_map(|caps| {
            let status = TaskStatus::from_keyword(&caps[1])?;
            let content = ellipsized(caps[2].trim(), TASK_CONTENT_MAX);
            Some(TaskItem::new(content, status))
        })
        .collect()
}

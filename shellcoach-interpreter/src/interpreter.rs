//! Interpreter facade
//!
//! One owned state object over both trackers, handed to the presentation
//! layer by reference. Every output chunk is delivered to both trackers
//! (each normalizes independently); neither depends on the other.

use shellcoach_protocol::InterpreterEvent;

use crate::assistant::{AssistantTracker, TrackerConfig};
use crate::interactive::InteractiveTracker;

/// The Terminal Output Interpreter.
///
/// Single-threaded and reactive: each call is a pure state transition with
/// no internal waiting. Delivery order of chunks is the only ordering
/// relied upon.
#[derive(Debug, Default)]
pub struct OutputInterpreter {
    interactive: InteractiveTracker,
    assistant: AssistantTracker,
}

impl OutputInterpreter {
    /// Create an interpreter in the initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter with a custom assistant-tracker configuration
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            interactive: InteractiveTracker::new(),
            assistant: AssistantTracker::with_config(config),
        }
    }

    /// The interactive-mode tracker
    pub fn interactive(&self) -> &InteractiveTracker {
        &self.interactive
    }

    /// The assistant session tracker
    pub fn assistant(&self) -> &AssistantTracker {
        &self.assistant
    }

    /// Mutable access to the assistant tracker (collapse toggles and other
    /// UI-driven control)
    pub fn assistant_mut(&mut self) -> &mut AssistantTracker {
        &mut self.assistant
    }

    /// Deliver one output chunk from the pseudo-terminal.
    ///
    /// Must never block the caller; returns whatever state-change events
    /// the trackers produced for this chunk.
    pub fn on_output_chunk(&mut self, chunk: &str) -> Vec<InterpreterEvent> {
        let mut events = Vec::new();

        if let Some(snapshot) = self.interactive.observe_chunk(chunk) {
            events.push(InterpreterEvent::InteractiveChanged { snapshot });
        }
        if let Some(event) = self.assistant.observe_chunk(chunk) {
            events.push(event);
        }

        events
    }

    /// Record a command the user just submitted to the shell.
    ///
    /// Used only for deterministic interactive-mode entry; the submitted
    /// text is never treated as terminal output.
    pub fn on_command_submitted(&mut self, command: &str) -> Option<InterpreterEvent> {
        self.interactive
            .command_submitted(command)
            .map(|snapshot| InterpreterEvent::InteractiveChanged { snapshot })
    }

    /// Reset all state machines to their initial state.
    ///
    /// Idempotent and immediate; does not depend on any further chunk.
    pub fn reset(&mut self) {
        self.interactive.reset();
        self.assistant.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellcoach_protocol::{InteractiveMode, PromptKind};

    fn quiet_interpreter() -> OutputInterpreter {
        OutputInterpreter::with_config(TrackerConfig::default().with_logging(false))
    }

    #[test]
    fn test_command_submission_precedes_output() {
        let mut interpreter = quiet_interpreter();

        let event = interpreter.on_command_submitted("vim notes.txt");
        assert!(event.is_some());
        assert_eq!(interpreter.interactive().mode(), InteractiveMode::EditorVim);

        interpreter.on_output_chunk("~\n~\n\"notes.txt\" 12L");
        assert_eq!(interpreter.interactive().mode(), InteractiveMode::EditorVim);

        interpreter.on_output_chunk("\n$ ");
        assert_eq!(interpreter.interactive().mode(), InteractiveMode::None);
    }

    #[test]
    fn test_both_trackers_see_each_chunk() {
        let mut interpreter = quiet_interpreter();
        interpreter.on_output_chunk("Welcome to Claude Code");

        // A confirmation prompt inside an assistant session reaches both
        // machines: the prompt tracker records it, the assistant tracker
        // falls through.
        let events = interpreter.on_output_chunk("Run the migration? [y/N] ");
        assert_eq!(events.len(), 1);
        assert_eq!(interpreter.interactive().prompt(), PromptKind::YesNo);
        assert!(interpreter.assistant().is_active());
    }

    #[test]
    fn test_chunk_can_produce_multiple_events() {
        let mut interpreter = quiet_interpreter();

        // Banner plus a trailing confirmation shape in one delivery
        let events = interpreter.on_output_chunk("Welcome to Claude Code\nProceed? [Y/n] ");
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_reset_equivalent_to_fresh() {
        let mut used = quiet_interpreter();
        used.on_command_submitted("less README.md");
        used.on_output_chunk("Welcome to Claude Code");
        used.on_output_chunk("> do something");
        used.reset();

        let mut fresh = quiet_interpreter();

        let chunk = "Overwrite file? [y/N] ";
        let used_events = used.on_output_chunk(chunk);
        let fresh_events = fresh.on_output_chunk(chunk);

        assert_eq!(used_events, fresh_events);
        assert_eq!(used.interactive().snapshot(), fresh.interactive().snapshot());
        assert_eq!(used.assistant().is_active(), fresh.assistant().is_active());
        assert_eq!(used.assistant().rounds().len(), fresh.assistant().rounds().len());
    }

    #[test]
    fn test_reset_idempotent() {
        let mut interpreter = quiet_interpreter();
        interpreter.on_output_chunk("Welcome to Claude Code");
        interpreter.reset();
        interpreter.reset();
        assert!(!interpreter.assistant().is_active());
    }
}

//! Interactive-mode state machine

use tracing::debug;

use shellcoach_protocol::{InteractiveMode, InteractiveSnapshot, PromptKind};

use crate::ansi::strip_csi;
use crate::patterns;

use super::command::launch_mode;

/// Tracks which full-screen program owns the terminal and whether a
/// confirmation prompt is pending.
///
/// Per-chunk rules run in strict priority order; the first match wins and
/// short-circuits the rest for that chunk. Unmatched chunks leave state
/// unchanged; there is no failure mode.
#[derive(Debug, Default)]
pub struct InteractiveTracker {
    mode: InteractiveMode,
    prompt: PromptKind,
    question: String,
}

impl InteractiveTracker {
    /// Create a tracker in the initial state (no mode, no prompt)
    pub fn new() -> Self {
        Self::default()
    }

    /// Which full-screen program currently owns the terminal
    pub fn mode(&self) -> InteractiveMode {
        self.mode
    }

    /// Whether a confirmation prompt is pending
    pub fn prompt(&self) -> PromptKind {
        self.prompt
    }

    /// The captured question text when a prompt is pending, empty otherwise
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Snapshot of the full tracker state for the UI
    pub fn snapshot(&self) -> InteractiveSnapshot {
        InteractiveSnapshot {
            mode: self.mode,
            prompt: self.prompt,
            question: self.question.clone(),
        }
    }

    /// Record a command the user just submitted.
    ///
    /// Recognized launch commands set the mode synchronously, before any
    /// output is observed; everything else leaves the mode untouched.
    pub fn command_submitted(&mut self, command: &str) -> Option<InteractiveSnapshot> {
        let mode = launch_mode(command);
        if mode.is_active() && mode != self.mode {
            debug!(?mode, "entering interactive mode");
            self.mode = mode;
            return Some(self.snapshot());
        }
        None
    }

    /// Classify one output chunk, returning a snapshot when state changed.
    pub fn observe_chunk(&mut self, chunk: &str) -> Option<InteractiveSnapshot> {
        let clean = strip_csi(chunk);

        // Rule 1: confirmation prompts win over everything. A pending
        // question must never be cleared by a pager-continuation or exit
        // match that happens to share trailing characters.
        if patterns::CONFIRM_PROMPT.is_match(&clean) {
            let question = last_non_empty_line(&clean);
            if self.prompt != PromptKind::YesNo || self.question != question {
                debug!(question = %question, "confirmation prompt detected");
                self.prompt = PromptKind::YesNo;
                self.question = question;
                return Some(self.snapshot());
            }
            return None;
        }

        // Rule 2: pager screens can themselves contain lines ending in `$`,
        // so continuation markers keep pager mode and stop evaluation here.
        if self.mode == InteractiveMode::Pager && patterns::PAGER_CONTINUATION.is_match(&clean) {
            return None;
        }

        // Rules 3 and 4: a shell prompt shape means the full-screen program
        // exited, or a pending question was answered.
        if patterns::is_shell_prompt(&clean) {
            if self.mode.is_active() {
                debug!(from = ?self.mode, "shell prompt returned, leaving interactive mode");
                self.mode = InteractiveMode::None;
                return Some(self.snapshot());
            }
            if self.prompt.is_pending() {
                debug!("shell prompt returned, clearing pending prompt");
                self.prompt = PromptKind::None;
                self.question.clear();
                return Some(self.snapshot());
            }
        }

        None
    }

    /// Reset to the initial state. Idempotent and immediate.
    pub fn reset(&mut self) {
        self.mode = InteractiveMode::None;
        self.prompt = PromptKind::None;
        self.question.clear();
    }
}

/// The last non-empty line of a chunk, trailing spaces preserved
fn last_non_empty_line(text: &str) -> String {
    text.lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Mode Entry Tests ====================

    #[test]
    fn test_tracker_initial_state() {
        let tracker = InteractiveTracker::new();
        assert_eq!(tracker.mode(), InteractiveMode::None);
        assert_eq!(tracker.prompt(), PromptKind::None);
        assert!(tracker.question().is_empty());
    }

    #[test]
    fn test_vim_sets_mode_before_any_output() {
        let mut tracker = InteractiveTracker::new();

        let snapshot = tracker.command_submitted("vim notes.txt");
        assert!(snapshot.is_some());
        assert_eq!(tracker.mode(), InteractiveMode::EditorVim);
    }

    #[test]
    fn test_unrecognized_command_leaves_mode_unchanged() {
        let mut tracker = InteractiveTracker::new();

        assert!(tracker.command_submitted("git log").is_none());
        assert_eq!(tracker.mode(), InteractiveMode::None);
    }

    #[test]
    fn test_shell_prompt_exits_editor() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("vim notes.txt");

        let snapshot = tracker.observe_chunk("saved \"notes.txt\"\n$ ");
        assert!(snapshot.is_some());
        assert_eq!(tracker.mode(), InteractiveMode::None);
    }

    #[test]
    fn test_shell_prompt_exits_nano() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("nano todo.txt");
        assert_eq!(tracker.mode(), InteractiveMode::EditorNano);

        let snapshot = tracker.observe_chunk("[ Wrote 4 lines ]\nuser@host:~$ ");
        assert!(snapshot.is_some());
        assert_eq!(tracker.mode(), InteractiveMode::None);
    }

    #[test]
    fn test_shell_prompt_exits_monitor() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("htop");
        assert_eq!(tracker.mode(), InteractiveMode::Monitor);

        let snapshot = tracker.observe_chunk("\nhost% ");
        assert!(snapshot.is_some());
        assert_eq!(tracker.mode(), InteractiveMode::None);
    }

    // ==================== Pager Continuation Tests ====================

    #[test]
    fn test_pager_continuation_keeps_pager() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("man grep");
        assert_eq!(tracker.mode(), InteractiveMode::Pager);

        for chunk in ["page of text\n:", "more text\n(END)", "--More--(15%)", "lines 1-24"] {
            assert!(tracker.observe_chunk(chunk).is_none());
            assert_eq!(tracker.mode(), InteractiveMode::Pager);
        }
    }

    #[test]
    fn test_pager_screen_with_dollar_line_stays_in_pager() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("less script.sh");

        // A pager screen showing shell code, still ending in a continuation
        // marker, must not be misread as shell return.
        tracker.observe_chunk("echo $PATH\nexport FOO=$BAR\n:");
        assert_eq!(tracker.mode(), InteractiveMode::Pager);
    }

    #[test]
    fn test_pager_exits_on_shell_prompt() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("less README.md");

        tracker.observe_chunk("\nuser@host:~/project$ ");
        assert_eq!(tracker.mode(), InteractiveMode::None);
    }

    // ==================== Confirmation Prompt Tests ====================

    #[test]
    fn test_confirmation_prompt_detected_with_question() {
        let mut tracker = InteractiveTracker::new();

        let snapshot = tracker.observe_chunk("Overwrite file? [y/N] ");
        assert!(snapshot.is_some());
        assert_eq!(tracker.prompt(), PromptKind::YesNo);
        assert_eq!(tracker.question(), "Overwrite file? [y/N] ");
    }

    #[test]
    fn test_confirmation_wins_over_pager_continuation() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("man mv");

        // Ends in a confirmation shape; even in pager mode the prompt rule
        // runs first.
        let snapshot = tracker.observe_chunk("lines 1-24\nOverwrite file? [y/N] ");
        assert!(snapshot.is_some());
        assert_eq!(tracker.prompt(), PromptKind::YesNo);
        assert_eq!(tracker.mode(), InteractiveMode::Pager);
    }

    #[test]
    fn test_question_is_last_non_empty_line() {
        let mut tracker = InteractiveTracker::new();

        tracker.observe_chunk("copying files...\n\nReplace existing archive? (yes/no)\n");
        assert_eq!(tracker.question(), "Replace existing archive? (yes/no)");
    }

    #[test]
    fn test_repeated_confirmation_chunk_reports_once() {
        let mut tracker = InteractiveTracker::new();

        assert!(tracker.observe_chunk("Proceed? [Y/n] ").is_some());
        assert!(tracker.observe_chunk("Proceed? [Y/n] ").is_none());
    }

    #[test]
    fn test_prompt_cleared_on_shell_return() {
        let mut tracker = InteractiveTracker::new();
        tracker.observe_chunk("Delete branch? (y/n)");
        assert_eq!(tracker.prompt(), PromptKind::YesNo);

        tracker.observe_chunk("deleted\n$ ");
        assert_eq!(tracker.prompt(), PromptKind::None);
        assert!(tracker.question().is_empty());
    }

    // ==================== Rule Priority Tests ====================

    #[test]
    fn test_mode_exit_short_circuits_prompt_exit() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("less install.sh");
        tracker.observe_chunk("Run installer? [Y/n] ");
        assert_eq!(tracker.prompt(), PromptKind::YesNo);

        // One chunk: the mode-exit rule fires and short-circuits, leaving
        // the prompt pending until the next shell-prompt chunk.
        tracker.observe_chunk("\n$ ");
        assert_eq!(tracker.mode(), InteractiveMode::None);
        assert_eq!(tracker.prompt(), PromptKind::YesNo);

        tracker.observe_chunk("\n$ ");
        assert_eq!(tracker.prompt(), PromptKind::None);
    }

    #[test]
    fn test_unmatched_chunk_leaves_state_unchanged() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("top");

        assert!(tracker.observe_chunk("PID USER      PR  NI").is_none());
        assert_eq!(tracker.mode(), InteractiveMode::Monitor);
    }

    // ==================== Escape Handling Tests ====================

    #[test]
    fn test_escapes_stripped_before_matching() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("vim notes.txt");

        tracker.observe_chunk("\x1b[2J\x1b[H\n\x1b[32m$\x1b[0m ");
        assert_eq!(tracker.mode(), InteractiveMode::None);
    }

    // ==================== Reset Tests ====================

    #[test]
    fn test_reset_clears_everything() {
        let mut tracker = InteractiveTracker::new();
        tracker.command_submitted("man tar");
        tracker.observe_chunk("Extract here? [y/N] ");

        tracker.reset();
        assert_eq!(tracker.snapshot(), InteractiveSnapshot::default());

        // Idempotent
        tracker.reset();
        assert_eq!(tracker.snapshot(), InteractiveSnapshot::default());
    }
}

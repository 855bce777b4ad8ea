//! Shared pattern tables for terminal output classification
//!
//! All heuristics live here as prioritized (pattern, action) data so each
//! tracker stays a plain state machine over these tables. The input is not
//! a grammar; these are deliberately loose text shapes evaluated in fixed
//! order by the trackers.

use lazy_static::lazy_static;
use regex::Regex;
use shellcoach_protocol::ToolKind;

/// Spinner glyphs used by the assistant's progress animation
pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Checkmark glyphs printed when a tool invocation completes
pub const CHECKMARK_CHARS: &[char] = &['✓', '✔'];

/// Box-drawing glyph opening the assistant's welcome banner
pub const ASSISTANT_BANNER_GLYPH: &str = "╭─";

/// The assistant's product name as printed in its banner
pub const ASSISTANT_NAME: &str = "Claude Code";

/// Short name used to guard inferred session exit: a shell-prompt shape that
/// also mentions the assistant is assumed to be assistant output, not a real
/// shell return.
pub const ASSISTANT_NAME_SHORT: &str = "Claude";

/// Farewell text the assistant prints on explicit exit
pub const ASSISTANT_FAREWELL: &str = "Goodbye!";

lazy_static! {
    /// CSI escape sequences: `ESC [ params final-letter`
    pub static ref CSI_SEQUENCE: Regex = Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap();

    /// Yes/no confirmation shapes anchored to the end of the chunk:
    /// `[Y/n]`, `[y/N]`, `[yes/no]`, `(y/n)`, `(yes/no)`, case-insensitive.
    pub static ref CONFIRM_PROMPT: Regex =
        Regex::new(r"(?i)[\[(]y(?:es)?/n(?:o)?[\])]\s*$").unwrap();

    /// Shell-prompt-return shapes: a final line ending in a bare `$` or `%`,
    /// or an arrow-prefixed prompt ending in `~` or `/`.
    pub static ref SHELL_PROMPTS: Vec<Regex> = vec![
        Regex::new(r"(?:^|\n)[^\n]*\$\s*$").unwrap(),
        Regex::new(r"(?:^|\n)[^\n]*%\s*$").unwrap(),
        Regex::new(r"→\s+[^\n]*[~/]\s*$").unwrap(),
    ];

    /// Pager continuation shapes: trailing bare colon, `(END)` marker,
    /// `--More--` banner, or a `lines N-M` indicator.
    pub static ref PAGER_CONTINUATION: Regex =
        Regex::new(r"(?::\s*$|\(END\)|--More--|lines \d+-\d+)").unwrap();

    /// Echo of a user prompt submitted to the assistant: a line beginning
    /// with `>` followed by 1-50 characters.
    pub static ref USER_PROMPT_ECHO: Regex = Regex::new(r"(?m)^>\s+(.{1,50})").unwrap();

    /// One `[status] content` pair in a task-list update
    pub static ref TASK_LIST_ITEM: Regex =
        Regex::new(r"(?i)\[?(pending|in_progress|completed)\]?\s*(.+)").unwrap();

    /// File tools anchored to a path argument (`/`, `./`, or `~` prefix).
    /// Checked before [`GENERIC_TOOLS`] so status lines like "Read 138 lines"
    /// never register as tool invocations.
    pub static ref PATH_TOOLS: Vec<(ToolKind, &'static str, Regex)> = vec![
        (ToolKind::Read, "Reading", Regex::new(r"Read\s+(/\S+|\./\S+|~\S+)").unwrap()),
        (ToolKind::Write, "Writing", Regex::new(r"Write\s+(/\S+|\./\S+|~\S+)").unwrap()),
        (ToolKind::Edit, "Editing", Regex::new(r"Edit\s+(/\S+|\./\S+|~\S+)").unwrap()),
    ];

    /// Remaining tool patterns, evaluated in this order; the first match wins.
    pub static ref GENERIC_TOOLS: Vec<(ToolKind, &'static str, Regex)> = vec![
        (ToolKind::Bash, "Running", Regex::new(r"Bash:\s*([^\n]+)").unwrap()),
        (ToolKind::Glob, "Finding", Regex::new(r"Glob\s+([^\n]+)").unwrap()),
        (ToolKind::Grep, "Searching", Regex::new(r"Grep\s+([^\n]+)").unwrap()),
        (ToolKind::WebFetch, "Fetching", Regex::new(r"WebFetch\s+(https?://\S+)").unwrap()),
        (ToolKind::WebSearch, "Searching", Regex::new(r"WebSearch\s+([^\n]+)").unwrap()),
        (ToolKind::Task, "Subtask", Regex::new(r"Task\s+([^\n]+)").unwrap()),
    ];
}

/// Check whether a chunk ends in a recognized shell-prompt-return shape
pub fn is_shell_prompt(text: &str) -> bool {
    SHELL_PROMPTS.iter().any(|p| p.is_match(text))
}

/// Clip a string to at most `max` characters, no suffix
pub(crate) fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Clip a string to at most `max` characters, appending `...` when clipped
pub(crate) fn ellipsized(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut clipped = clip(text, max);
        clipped.push_str("...");
        clipped
    } else {
        text.to_string()
    }
}

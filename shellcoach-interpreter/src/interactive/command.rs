//! Launch-command classification
//!
//! Maps a just-submitted shell command to the full-screen mode it will own.
//! Deterministic table lookup; output text never triggers mode entry.

use shellcoach_protocol::InteractiveMode;

/// Classify the interactive mode a submitted command will enter.
///
/// Matches on the basename of the first token, so `/usr/bin/less README`
/// and `less README` behave the same. Unrecognized commands map to
/// [`InteractiveMode::None`].
///
/// # Examples
///
/// ```
/// use shellcoach_interpreter::launch_mode;
/// use shellcoach_protocol::InteractiveMode;
///
/// assert_eq!(launch_mode("man grep"), InteractiveMode::Pager);
/// assert_eq!(launch_mode("vim notes.txt"), InteractiveMode::EditorVim);
/// assert_eq!(launch_mode("ls -la"), InteractiveMode::None);
/// ```
pub fn launch_mode(command: &str) -> InteractiveMode {
    let first = command.trim().split_whitespace().next().unwrap_or("");
    let basename = std::path::Path::new(first)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(first);

    match basename {
        "man" | "less" | "more" => InteractiveMode::Pager,
        "vim" | "vi" | "nvim" => InteractiveMode::EditorVim,
        "nano" => InteractiveMode::EditorNano,
        "top" | "htop" => InteractiveMode::Monitor,
        _ => InteractiveMode::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_commands() {
        assert_eq!(launch_mode("man ls"), InteractiveMode::Pager);
        assert_eq!(launch_mode("less /var/log/syslog"), InteractiveMode::Pager);
        assert_eq!(launch_mode("more README.md"), InteractiveMode::Pager);
    }

    #[test]
    fn test_editor_commands() {
        assert_eq!(launch_mode("vim notes.txt"), InteractiveMode::EditorVim);
        assert_eq!(launch_mode("vi config"), InteractiveMode::EditorVim);
        assert_eq!(launch_mode("nvim src/main.rs"), InteractiveMode::EditorVim);
        assert_eq!(launch_mode("nano todo"), InteractiveMode::EditorNano);
    }

    #[test]
    fn test_monitor_commands() {
        assert_eq!(launch_mode("top"), InteractiveMode::Monitor);
        assert_eq!(launch_mode("htop -d 10"), InteractiveMode::Monitor);
    }

    #[test]
    fn test_absolute_path_matches_basename() {
        assert_eq!(launch_mode("/usr/bin/less file.txt"), InteractiveMode::Pager);
        assert_eq!(launch_mode("/usr/local/bin/nvim ."), InteractiveMode::EditorVim);
    }

    #[test]
    fn test_unrecognized_commands() {
        assert_eq!(launch_mode("ls -la"), InteractiveMode::None);
        assert_eq!(launch_mode("git status"), InteractiveMode::None);
        assert_eq!(launch_mode("claude"), InteractiveMode::None);
        assert_eq!(launch_mode(""), InteractiveMode::None);
    }

    #[test]
    fn test_leading_whitespace_ignored() {
        assert_eq!(launch_mode("   man bash"), InteractiveMode::Pager);
    }
}

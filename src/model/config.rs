use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// How the lookback window selects prior notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookBackMode {
    /// Notes dated within the last `look_back` calendar days
    Days,
    /// The `look_back` most recent notes that exist, regardless of gaps
    Recent,
}

/// Configuration from rollover.toml. Every field has a default so a
/// missing or partial file falls back to stock behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window size: days back, or note count (see `look_back_mode`)
    pub look_back: usize,
    pub look_back_mode: LookBackMode,
    /// Match carried todos to sections with the same heading line
    pub group_by_section: bool,
    /// Strip `- [ ]` lines with no label from today's note after the merge
    pub remove_empty_todos: bool,
    /// Rewrite prior notes to drop the todos carried into today
    pub remove_from_previous: bool,
    /// Checkbox markers recognized as todos, beyond the literal space
    pub todo_chars: String,
    /// Markers that signify completion
    pub complete_chars: String,
    /// chrono format for note file stems; files are `<stem>.md`
    pub note_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            look_back: default_look_back(),
            look_back_mode: LookBackMode::Days,
            group_by_section: true,
            remove_empty_todos: true,
            remove_from_previous: false,
            todo_chars: default_todo_chars(),
            complete_chars: default_complete_chars(),
            note_format: default_note_format(),
        }
    }
}

fn default_look_back() -> usize {
    7
}

fn default_todo_chars() -> String {
    "xX/-".to_string()
}

fn default_complete_chars() -> String {
    "xX-".to_string()
}

fn default_note_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Config {
    /// Every marker recognized as a todo. The space marker is always
    /// present even when absent from the configured string.
    pub fn allowed_chars(&self) -> IndexSet<char> {
        let mut chars: IndexSet<char> = self.todo_chars.chars().collect();
        chars.insert(' ');
        chars
    }

    /// Markers that signify completion
    pub fn complete_chars(&self) -> IndexSet<char> {
        self.complete_chars.chars().collect()
    }
}

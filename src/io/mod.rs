pub mod config_io;
pub mod note_io;

pub use config_io::{CONFIG_FILE, ConfigError, read_config, write_config};
pub use note_io::{DailyNote, NoteError, collect_daily_notes, daily_note_path, read_note, write_note};

//! Line input for the console menu.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use tracing::warn;

/// Source of user input lines.
pub trait LineReader {
    /// Show `prompt` and read one line. `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

impl<T: LineReader + ?Sized> LineReader for &mut T {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        (**self).read_line(prompt)
    }
}

/// Get the history file path.
fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".sabor_history")
}

/// Terminal input backed by rustyline.
pub struct EditorInput {
    editor: Editor<(), DefaultHistory>,
    history: PathBuf,
}

impl EditorInput {
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();
        let mut editor: Editor<(), DefaultHistory> = Editor::with_config(config)?;

        let history = history_path();
        if history.exists() {
            let _ = editor.load_history(&history);
        }

        Ok(Self { editor, history })
    }

    pub fn save_history(&mut self) {
        if let Err(e) = self.editor.save_history(&self.history) {
            warn!("Failed to save history: {}", e);
        }
    }
}

impl LineReader for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Some(line),
            // Ctrl+C and Ctrl+D both leave the menu.
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(err) => {
                warn!("Failed to read input: {:?}", err);
                None
            }
        }
    }
}

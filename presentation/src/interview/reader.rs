//! Line input for the setup form and the interview loop

use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::Path;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// One read from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D or end of input
    Eof,
}

/// Source of input lines
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<Input>;
}

/// Line editor backed by reedline, with optional file history
pub struct ReedlineReader {
    editor: Reedline,
}

impl ReedlineReader {
    pub fn new(history_file: Option<&Path>) -> Self {
        let mut editor = Reedline::create();

        if let Some(path) = history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        Self { editor }
    }
}

impl LineReader for ReedlineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<Input> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(prompt.to_string()),
            DefaultPromptSegment::Empty,
        );
        match self.editor.read_line(&prompt)? {
            Signal::Success(line) => Ok(Input::Line(line)),
            Signal::CtrlC => Ok(Input::Interrupted),
            _ => Ok(Input::Eof),
        }
    }
}

/// Replays a fixed script of inputs, then reports end of input
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedReader {
    inputs: std::collections::VecDeque<Input>,
}

#[cfg(test)]
impl ScriptedReader {
    pub(crate) fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(|l| Input::Line(l.into())).collect(),
        }
    }

    pub(crate) fn push(&mut self, input: Input) {
        self.inputs.push_back(input);
    }
}

#[cfg(test)]
impl LineReader for ScriptedReader {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Input> {
        Ok(self.inputs.pop_front().unwrap_or(Input::Eof))
    }
}

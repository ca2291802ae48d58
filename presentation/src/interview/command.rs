//! Slash commands and multi-line answer entry

/// Commands accepted while a session is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `/lang [code]`; without a code, lists the available languages
    Lang(Option<String>),
    Restart,
    Quit,
    Help,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a slash command. Returns `None` for ordinary input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or(line);
        let command = match name {
            "/lang" | "/language" | "/l" => ReplCommand::Lang(parts.next().map(str::to_string)),
            "/restart" | "/new" | "/r" => ReplCommand::Restart,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            _ => ReplCommand::Unknown(name.to_string()),
        };
        Some(command)
    }
}

/// Collects an answer that may span several lines.
///
/// A line ending in `\` continues on the next line.
#[derive(Debug, Default)]
pub struct AnswerBuffer {
    lines: Vec<String>,
}

impl AnswerBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line. Returns `true` while the answer continues.
    pub fn push(&mut self, line: &str) -> bool {
        let trimmed = line.trim_end();
        match trimmed.strip_suffix('\\') {
            Some(head) => {
                self.lines.push(head.to_string());
                true
            }
            None => {
                self.lines.push(line.to_string());
                false
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Return the collected answer and reset the buffer
    pub fn take(&mut self) -> String {
        let text = self.text();
        self.lines.clear();
        text
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

//! Interactive input commands

/// One line typed at the monitor prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Activate the row at this index
    CopyRow(usize),
    Clear,
    About,
    Refresh,
    Quit,
    /// Blank line, dismisses the current notice
    Dismiss,
    Unknown(String),
}

impl InputCommand {
    /// Parse one input line
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Dismiss;
        }
        if let Ok(index) = line.parse::<usize>() {
            return Self::CopyRow(index);
        }

        match line.to_lowercase().as_str() {
            "c" | "clear" => Self::Clear,
            "a" | "about" => Self::About,
            "r" | "refresh" => Self::Refresh,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

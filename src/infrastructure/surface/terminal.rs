//! Terminal rendering surface
//!
//! Interactive mode repaints the whole screen on every update, the way a
//! markup container is replaced wholesale. Plain mode prints each update
//! once, for one-shot commands and pipes.

use std::io::{self, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot;

use crate::application::ports::{Confirm, RenderSurface};
use crate::application::renderer::{HistoryView, EMPTY_HINT, EMPTY_TITLE};
use crate::domain::status::Status;

/// How the surface writes to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// Clear and repaint the whole screen on each update
    Interactive,
    /// Append each update, never clear
    Plain,
}

/// Everything currently on screen
#[derive(Debug, Default)]
struct Frame {
    history: Vec<String>,
    status: String,
    notice: Option<String>,
    prompt: Option<String>,
}

/// Terminal surface, also the yes/no prompt
pub struct TerminalSurface {
    mode: TerminalMode,
    frame: Mutex<Frame>,
    pending_answer: Mutex<Option<oneshot::Sender<bool>>>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalSurface {
    /// Create a surface writing to stdout
    pub fn new(mode: TerminalMode) -> Self {
        Self::with_writer(mode, Box::new(io::stdout()))
    }

    /// Create a surface writing to `out`
    pub fn with_writer(mode: TerminalMode, out: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            frame: Mutex::new(Frame::default()),
            pending_answer: Mutex::new(None),
            out: Mutex::new(out),
        }
    }

    /// Route an input line to a waiting prompt.
    ///
    /// Returns false when no prompt is waiting, so the caller should treat
    /// the line as a command.
    pub fn answer(&self, line: &str) -> bool {
        let pending = self
            .pending_answer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        match pending {
            Some(tx) => {
                let _ = tx.send(is_yes(line));
                true
            }
            None => false,
        }
    }

    /// Whether a prompt is waiting for an answer
    pub fn is_prompting(&self) -> bool {
        self.pending_answer
            .lock()
            .map(|p| p.is_some())
            .unwrap_or(false)
    }

    /// Drop the current notice, such as the about text
    pub fn dismiss_notice(&self) {
        self.update(|frame| frame.notice = None, None);
    }

    /// Apply `change` to the frame, then paint it (interactive) or print
    /// `plain` (plain mode)
    fn update(&self, change: impl FnOnce(&mut Frame), plain: Option<String>) {
        let mut frame = self.frame.lock().unwrap_or_else(|e| e.into_inner());
        change(&mut frame);

        let text = match self.mode {
            TerminalMode::Interactive => paint(&frame),
            TerminalMode::Plain => match plain {
                Some(text) => text,
                None => return,
            },
        };

        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

impl RenderSurface for TerminalSurface {
    fn show_history(&self, view: &HistoryView) {
        let lines = history_lines(view);
        let plain = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
        self.update(|frame| frame.history = lines, Some(plain));
    }

    fn show_status(&self, status: Status) {
        let line = status_line(status);
        let plain = format!("{}\n", line);
        self.update(|frame| frame.status = line, Some(plain));
    }

    fn show_notice(&self, text: &str) {
        let plain = format!("{}\n", text);
        self.update(|frame| frame.notice = Some(text.to_string()), Some(plain));
    }
}

#[async_trait]
impl Confirm for TerminalSurface {
    async fn confirm(&self, prompt: &str) -> bool {
        let question = format!("{} [y/N]", prompt);

        if self.mode == TerminalMode::Plain {
            self.update(|_| {}, Some(format!("{} ", question)));
            let mut line = String::new();
            let mut stdin = BufReader::new(tokio::io::stdin());
            return match stdin.read_line(&mut line).await {
                Ok(0) | Err(_) => false,
                Ok(_) => is_yes(&line),
            };
        }

        let (tx, rx) = oneshot::channel();
        // A prompt still waiting is superseded and reads as "no"
        *self
            .pending_answer
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(tx);
        self.update(|frame| frame.prompt = Some(question), None);

        let answer = rx.await.unwrap_or(false);
        self.update(|frame| frame.prompt = None, None);
        answer
    }
}

fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

fn history_lines(view: &HistoryView) -> Vec<String> {
    if view.is_empty() {
        return vec![
            format!("  {}", EMPTY_TITLE.bold()),
            format!("  {}", EMPTY_HINT.dimmed()),
        ];
    }

    view.rows()
        .iter()
        .map(|row| {
            format!(
                "{:>4}  {}  {}",
                row.index().to_string().cyan(),
                row.time_label().dimmed(),
                row.display_terminal()
            )
        })
        .collect()
}

fn status_line(status: Status) -> String {
    if status.is_failure() {
        format!("{} {}", "✗".red(), status)
    } else {
        format!("{} {}", "●".green(), status)
    }
}

fn paint(frame: &Frame) -> String {
    let mut screen = String::from("\x1b[2J\x1b[H");
    screen.push_str(&format!("{}\n\n", "Clipboard history".bold()));
    for line in &frame.history {
        screen.push_str(line);
        screen.push('\n');
    }
    screen.push('\n');
    screen.push_str(&frame.status);
    screen.push('\n');
    if let Some(notice) = &frame.notice {
        screen.push('\n');
        screen.push_str(notice);
        screen.push('\n');
    }
    match &frame.prompt {
        Some(prompt) => screen.push_str(&format!("\n{} ", prompt.yellow())),
        None => screen.push_str(&format!(
            "\n{} ",
            "[n] copy row  [c] clear  [r] refresh  [a] about  [q] quit >".dimmed()
        )),
    }
    screen
}

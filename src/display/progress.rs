//! Progress and status output for searches

use crate::error::AppError;
use crossterm::style::Stylize;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(100);
const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner drawn on stderr while a search is in flight. Stdout stays
/// clean for the result table
pub struct ProgressSpinner {
    message: String,
    running: Arc<AtomicBool>,
    worker: Option<thread::JoinHandle<()>>,
}

impl ProgressSpinner {
    pub fn new(message: String) -> Self {
        Self {
            message,
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    /// No-op unless stderr is a terminal
    pub fn start(&mut self) {
        if self.worker.is_some() || !atty::is(atty::Stream::Stderr) {
            return;
        }

        self.running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.running);
        let message = self.message.clone();

        self.worker = Some(thread::spawn(move || {
            let mut stderr = io::stderr();
            for frame in FRAMES.iter().cycle() {
                if !running.load(Ordering::Relaxed) {
                    break;
                }
                let _ = write!(stderr, "\r{} {}", frame, message);
                let _ = stderr.flush();
                thread::sleep(FRAME_INTERVAL);
            }

            // Blank the spinner line
            let width = message.chars().count() + 2;
            let _ = write!(stderr, "\r{:width$}\r", "", width = width);
            let _ = stderr.flush();
        }));
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

}

impl Drop for ProgressSpinner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Types of operation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Success,
    Info,
    Warning,
    Error,
}

/// Format a status line. `highlight` colors warnings and errors red.
pub fn format_status(message: &str, status: OperationStatus, highlight: bool) -> String {
    let symbol = match status {
        OperationStatus::Success => "✅",
        OperationStatus::Info => "ℹ️",
        OperationStatus::Warning => "⚠️",
        OperationStatus::Error => "❌",
    };

    let highlight =
        highlight && matches!(status, OperationStatus::Warning | OperationStatus::Error);
    status_line(symbol, message, highlight)
}

fn status_line(symbol: &str, message: &str, highlight: bool) -> String {
    let text = if highlight {
        message.red().to_string()
    } else {
        message.to_string()
    };

    // Add space before emoji to prevent terminal clipping
    format!(" {} {}", symbol, text)
}

/// Color is only written when the profile asks for it and stderr is a terminal
pub fn highlight_enabled(requested: bool, stderr_is_tty: bool) -> bool {
    requested && stderr_is_tty
}

fn stderr_highlight(requested: bool) -> bool {
    highlight_enabled(requested, atty::is(atty::Stream::Stderr))
}

/// Print a status line, errors and warnings to stderr
pub fn display_status(message: &str, status: OperationStatus, highlight: bool) {
    match status {
        OperationStatus::Warning | OperationStatus::Error => {
            eprintln!("{}", format_status(message, status, stderr_highlight(highlight)))
        }
        _ => println!("{}", format_status(message, status, false)),
    }
}

/// Error line prefixed with the severity glyph, plus the hint when there is one
pub fn format_error(error: &AppError, highlight: bool) -> String {
    let mut output = status_line(
        error.severity().emoji(),
        &error.display_friendly(),
        highlight,
    );
    if let Some(hint) = error.troubleshooting_hint() {
        output.push_str(&format!("\n   Hint: {}", hint));
    }
    output
}

/// Print an error that should reach the user. Search pipeline failures are
/// skipped; they were already logged where they happened.
pub fn display_error(error: &AppError, highlight: bool) {
    if error.is_reported() {
        eprintln!("{}", format_error(error, stderr_highlight(highlight)));
    }
}

//! Terminal rendering of toasts and progress.
//!
//! Toasts carry the same color/title/description triple an embed would;
//! here the color becomes the ANSI accent of the toast frame.

use crate::models::{Notice, Severity};
use crate::services::executor_service::PanelView;

const RESET: &str = "\x1b[0m";

fn ansi(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "\x1b[36m",
        Severity::Success => "\x1b[32m",
        Severity::Warning => "\x1b[33m",
        Severity::Error => "\x1b[31m",
    }
}

pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        TerminalView
    }

    /// Print a block of pre-rendered page content.
    pub fn print_block(&self, content: &str) {
        println!("{}", content);
    }
}

impl PanelView for TerminalView {
    fn progress(&mut self, pct: u8) {
        let filled = (pct as usize) / 5;
        let bar: String = "█".repeat(filled) + &"░".repeat(20 - filled);
        println!("  Processing Batch  [{}] {:>3}%", bar, pct);
    }

    fn notify(&mut self, notice: &Notice) {
        let color = ansi(notice.severity);
        println!("{}  ╭─ {}{}", color, notice.title, RESET);
        for line in notice.description.lines() {
            println!("{}  │{}  {}", color, RESET, line);
        }
        println!("{}  ╰─{}", color, RESET);
    }
}

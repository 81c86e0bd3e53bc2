//! User-facing output.
//!
//! Everything the shell shows goes through [`Output`], so the same
//! handlers can print to the terminal or into a buffer under test.

use std::sync::{Arc, Mutex};

pub const PROMPT: &str = "> ";

pub const WELCOME: &str = "\
================================
  British Spoken Time Converter
================================
Enter a time as HH:MM, H:M or just the hour
It will be read back in British English

Type 'help' for available commands
Type 'config logs enable' to see what happens behind the scenes
Type 'q' or 'exit' to quit
";

pub const HELP: &str = "
Time to Words Converter
-----------------------
Enter a time as HH:MM, H:M, HH or H (24-hour clock)

Examples:
  0:00    -> midnight
  14:30   -> half past two
  8:45    -> quarter to nine
  6:32    -> six thirty two

Commands:
  help                 - Show this help message
  config               - Show current configuration
  config logs enable   - Enable console logging
  config logs disable  - Disable console logging (default)
  exit | quit | q      - Exit the application
";

pub const GOODBYE: &str = "\nGoodbye!";

const ERROR_PREFIX: &str = "Error: ";
const SUCCESS_PREFIX: &str = "Success: ";

pub trait Output: Send {
    fn write_line(&mut self, line: &str);

    fn show_welcome(&mut self) {
        self.write_line(WELCOME);
    }

    fn show_help(&mut self) {
        self.write_line(HELP);
    }

    fn show_exit(&mut self) {
        self.write_line(GOODBYE);
    }

    fn show_result(&mut self, result: &str) {
        self.write_line(result);
    }

    fn show_error(&mut self, error: &str) {
        self.write_line(&format!("{}{}", ERROR_PREFIX, error));
    }

    fn show_success(&mut self, message: &str) {
        self.write_line(&format!("{}{}", SUCCESS_PREFIX, message));
    }

    fn show_info(&mut self, message: &str) {
        self.write_line(message);
    }

    fn show_blank_line(&mut self) {
        self.write_line("");
    }
}

/// Writes to stdout
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Collects lines in memory. Clones share the same buffer, so a caller can
/// keep one handle and give the other away.
#[derive(Debug, Clone, Default)]
pub struct BufferedOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Output for BufferedOutput {
    fn write_line(&mut self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

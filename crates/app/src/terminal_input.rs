//! Console backed by the real terminal.
//!
//! Raw mode is held only while a single key is read, so frames and the
//! laser prompt use ordinary line-buffered, echoing I/O.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use crate::app_loop::Console;

pub struct TerminalConsole {
    stdin: Stdin,
    stdout: Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { stdin: io::stdin(), stdout: io::stdout() }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaves raw mode when dropped, including on early error returns.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn key_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        // Raw mode swallows the interrupt signal.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some('q'),
        KeyCode::Char(c) => Some(c),
        KeyCode::Esc => Some('q'),
        _ => Some('\0'),
    }
}

impl Console for TerminalConsole {
    fn read_key(&mut self) -> io::Result<char> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(c) = key_char(key) {
                    return Ok(c);
                }
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn show_frame(&mut self, frame: &str) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        self.stdout.write_all(frame.as_bytes())?;
        self.stdout.flush()
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.stdout, "{message}")?;
        self.stdout.flush()
    }
}

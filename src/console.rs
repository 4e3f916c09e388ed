//! Line-oriented console output with optional ANSI coloring.

use std::io::{self, IsTerminal, Write};

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const DIM: &str = "\x1b[90m";
    pub const BOLD: &str = "\x1b[1m";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    Dim,
    Bold,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => codes::RED,
            Color::Green => codes::GREEN,
            Color::Yellow => codes::YELLOW,
            Color::Cyan => codes::CYAN,
            Color::Dim => codes::DIM,
            Color::Bold => codes::BOLD,
        }
    }
}

/// Sink for command output. Every call writes one line.
pub trait Writer {
    fn write(&mut self, text: &str, color: Option<Color>) -> io::Result<()>;
}

/// Decides whether stdout output gets ANSI styling.
pub fn color_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

pub struct ConsoleWriter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleWriter<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Writer for ConsoleWriter<W> {
    fn write(&mut self, text: &str, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(color) if self.color => {
                writeln!(self.out, "{}{}{}", color.code(), text, codes::RESET)?
            }
            _ => writeln!(self.out, "{}", text)?,
        }
        self.out.flush()
    }
}

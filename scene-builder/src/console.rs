//! Colored progress output for the user.

use std::fmt::Display;
use std::io::{self, Write};

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

/// Line-oriented console writer.
///
/// Wraps any writer so tests can capture output in a `Vec<u8>`. When `color`
/// is false every line is plain text.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Console on stdout. Colors are enabled unless `no_color` is set or the
    /// environment (`NO_COLOR`, non-tty stdout, ...) disables them.
    pub fn stdout(no_color: bool) -> Self {
        let color = !no_color && colored::control::SHOULD_COLORIZE.should_colorize();
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Banner: a rule, the text centered under it, another rule.
    pub fn header(&mut self, text: &str) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let title = format!("{text:^width$}", width = RULE_WIDTH);
        writeln!(self.out)?;
        let rule = self.paint(&rule, |s| s.blue().bold());
        let title = self.paint(&title, |s| s.blue().bold());
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out)
    }

    pub fn success(&mut self, text: impl Display) -> io::Result<()> {
        let line = self.paint(&format!("✓ {text}"), |s| s.green());
        writeln!(self.out, "{line}")
    }

    pub fn error(&mut self, text: impl Display) -> io::Result<()> {
        let line = self.paint(&format!("✗ {text}"), |s| s.red());
        writeln!(self.out, "{line}")
    }

    pub fn info(&mut self, text: impl Display) -> io::Result<()> {
        let line = self.paint(&format!("ℹ {text}"), |s| s.yellow());
        writeln!(self.out, "{line}")
    }

    /// Unstyled line.
    pub fn plain(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Unstyled text without a newline, flushed so it shows before a read.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

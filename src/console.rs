//! Input and display collaborators.
//!
//! The session never touches the terminal directly. It reads lines through
//! an [`Input`] and writes through a [`Screen`], so a game can be driven by a
//! real terminal or by a script.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SEQUENCE: &str = "\u{1b}[2J\u{1b}[H";

/// A source of line-based user input.
pub trait Input {
    /// Shows `prompt` and reads one line, without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying reader or writer.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A sink for rendered game text.
pub trait Screen {
    /// Clears whatever was previously shown.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    fn clear(&mut self) -> io::Result<()>;

    /// Writes one line of text.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Line input from a terminal: prompts go to `writer`, answers come from
/// `reader`.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl LineInput<StdinLock<'static>, Stdout> {
    /// Reads from standard input, prompting on standard output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Creates line input over any reader and prompt writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the input, returning its prompt writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Input for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// A screen backed by a text writer, usually standard output.
#[derive(Debug)]
pub struct TextScreen<W> {
    writer: W,
}

impl TextScreen<Stdout> {
    /// Writes to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextScreen<W> {
    /// Creates a screen over any writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the screen, returning its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Screen for TextScreen<W> {
    fn clear(&mut self) -> io::Result<()> {
        write!(self.writer, "{CLEAR_SEQUENCE}")?;
        self.writer.flush()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }
}

/// Input that answers prompts from a fixed list of lines.
///
/// Every prompt it is asked is recorded, answered or not.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Creates input that yields `lines` in order, then end of file.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Returns the prompts shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns the number of lines not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// A screen that keeps everything written to it.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
    clears: usize,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            clears: 0,
        }
    }

    /// Returns every line written, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns how many times the screen was cleared.
    #[must_use]
    pub const fn clears(&self) -> usize {
        self.clears
    }

    /// Returns whether any written line equals `line`.
    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|written| written == line)
    }
}

impl Screen for Transcript {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

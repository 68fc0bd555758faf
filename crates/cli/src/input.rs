//! Line-oriented input sources.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Source of user input, one line at a time.
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Reads lines from any buffered reader (stdin in production).
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Fixed sequence of lines, for driving a session deterministically.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_strips_terminators() {
        let mut src = ReaderSource::new("one\ntwo\r\nthree".as_bytes());
        assert_eq!(src.next_line().unwrap().as_deref(), Some("one"));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("two"));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("three"));
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn reader_keeps_blank_lines() {
        let mut src = ReaderSource::new("\n\n".as_bytes());
        assert_eq!(src.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(src.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn scripted_input_drains_in_order() {
        let mut src = ScriptedInput::new(["1", "Jasmine"]);
        assert_eq!(src.remaining(), 2);
        assert_eq!(src.next_line().unwrap().as_deref(), Some("1"));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("Jasmine"));
        assert_eq!(src.next_line().unwrap(), None);
    }
}

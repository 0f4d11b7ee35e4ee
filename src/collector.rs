use std::io::{BufRead, Write};

use log::{debug, info, log_enabled, Level};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Input ended after {collected} of {expected} entries!")]
    InputExhausted { collected: usize, expected: usize },
    #[error("Entry is {length} characters long, the limit is {limit}!")]
    EntryTooLong { length: usize, limit: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One line of user-supplied text with the line-terminator stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry(String);

impl Entry {
    fn new(text: String, max_length: usize) -> Result<Entry, CollectError> {
        let length = text.chars().count();
        if length > max_length {
            return Err(CollectError::EntryTooLong {
                length,
                limit: max_length,
            });
        }
        Ok(Entry(text))
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// Ordered entries awaiting rendering, capped at a fixed target count.
#[derive(Debug)]
pub struct EntrySequence {
    target: usize,
    entries: Vec<Entry>,
}

impl EntrySequence {
    pub(crate) fn new(target: usize) -> EntrySequence {
        EntrySequence {
            target,
            entries: Vec::with_capacity(target),
        }
    }

    fn push(&mut self, entry: Entry) {
        assert!(
            self.entries.len() < self.target,
            "EntrySequence is already complete!"
        );
        self.entries.push(entry);
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == self.target
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

fn log_entry(entry: &Entry, number: usize, count: usize) {
    if log_enabled!(Level::Debug) {
        debug!(
            "Collected entry {} of {} (length {}).",
            number,
            count,
            entry.text().chars().count()
        );
    } else {
        info!("Collected entry {} of {}.", number, count);
    }
}

/// Reads one line, or `None` once the input stream is exhausted.
///
/// A trailing `\n` is stripped, and a `\r` before it on Windows-style
/// input. Nothing else is trimmed.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>, CollectError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
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

/// Collects exactly `count` entries from a line-oriented input stream.
///
/// Writes one prompt line to `prompt_sink` per entry requested,
/// interleaved with the reads. An empty line is a valid, empty entry.
///
/// # Arguments
///
/// * `count` - The number of entries to collect, at least 1.
/// * `max_length` - The maximum entry length in characters.
/// * `input` - The line-oriented input stream.
/// * `prompt_sink` - Where the prompts are written.
///
/// # Errors
///
/// This function will return an error if the stream ends before `count`
/// entries are collected, if a line exceeds `max_length` characters, or if
/// reading the input or writing a prompt fails.
pub fn collect(
    count: usize,
    max_length: usize,
    input: &mut impl BufRead,
    prompt_sink: &mut impl Write,
) -> Result<EntrySequence, CollectError> {
    let mut entries = EntrySequence::new(count);
    while !entries.is_complete() {
        writeln!(prompt_sink, "Please enter a name:")?;
        prompt_sink.flush()?;
        let Some(line) = read_line(input)? else {
            return Err(CollectError::InputExhausted {
                collected: entries.len(),
                expected: count,
            });
        };
        let entry = Entry::new(line, max_length)?;
        log_entry(&entry, entries.len() + 1, count);
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn texts(entries: &EntrySequence) -> Vec<&str> {
        entries.iter().map(|entry| entry.text()).collect()
    }

    #[test]
    fn collects_exact_count() {
        let mut input = Cursor::new("Alice\nBob\n");
        let mut prompts = Vec::new();
        let entries = collect(2, 99, &mut input, &mut prompts).unwrap();
        assert!(entries.is_complete());
        assert_eq!(texts(&entries), vec!["Alice", "Bob"]);
    }

    #[test]
    fn writes_one_prompt_per_entry() {
        let mut input = Cursor::new("Alice\nBob\n");
        let mut prompts = Vec::new();
        collect(2, 99, &mut input, &mut prompts).unwrap();
        let prompts = String::from_utf8(prompts).unwrap();
        assert_eq!(prompts, "Please enter a name:\nPlease enter a name:\n");
    }

    #[test]
    fn strips_windows_line_terminator() {
        let mut input = Cursor::new("Alice\r\nBob\r\n");
        let mut prompts = Vec::new();
        let entries = collect(2, 99, &mut input, &mut prompts).unwrap();
        assert_eq!(texts(&entries), vec!["Alice", "Bob"]);
    }

    #[test]
    fn preserves_inner_whitespace() {
        let mut input = Cursor::new("  Alice  \nBob\n");
        let mut prompts = Vec::new();
        let entries = collect(2, 99, &mut input, &mut prompts).unwrap();
        assert_eq!(texts(&entries), vec!["  Alice  ", "Bob"]);
    }

    #[test]
    fn empty_line_is_a_valid_entry() {
        let mut input = Cursor::new("\nBob\n");
        let mut prompts = Vec::new();
        let entries = collect(2, 99, &mut input, &mut prompts).unwrap();
        assert_eq!(texts(&entries), vec!["", "Bob"]);
    }

    #[test]
    fn accepts_final_line_without_terminator() {
        let mut input = Cursor::new("Alice\nBob");
        let mut prompts = Vec::new();
        let entries = collect(2, 99, &mut input, &mut prompts).unwrap();
        assert_eq!(texts(&entries), vec!["Alice", "Bob"]);
    }

    #[test]
    fn fails_when_input_is_exhausted() {
        let mut input = Cursor::new("Alice\n");
        let mut prompts = Vec::new();
        let result = collect(2, 99, &mut input, &mut prompts);
        assert!(matches!(
            result,
            Err(CollectError::InputExhausted {
                collected: 1,
                expected: 2,
            })
        ));
    }

    #[test]
    fn fails_when_entry_is_too_long() {
        let long_name = "x".repeat(100);
        let mut input = Cursor::new(format!("{long_name}\nBob\n"));
        let mut prompts = Vec::new();
        let result = collect(2, 99, &mut input, &mut prompts);
        assert!(matches!(
            result,
            Err(CollectError::EntryTooLong {
                length: 100,
                limit: 99,
            })
        ));
    }

    #[test]
    fn length_limit_counts_characters() {
        let crabs = "🦀".repeat(99);
        let mut input = Cursor::new(format!("{crabs}\nBob\n"));
        let mut prompts = Vec::new();
        let entries = collect(2, 99, &mut input, &mut prompts).unwrap();
        assert_eq!(texts(&entries), vec![crabs.as_str(), "Bob"]);
    }

    #[test]
    fn round_trips_terminator_free_text() {
        let original = "  Bob the 2nd! ";
        let mut input = Cursor::new(format!("{original}\n"));
        let mut prompts = Vec::new();
        let entries = collect(1, 99, &mut input, &mut prompts).unwrap();
        assert_eq!(texts(&entries), vec![original]);
    }
}

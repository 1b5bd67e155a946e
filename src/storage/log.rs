use std::io::BufRead;

use super::constant::LOG_SEPARATOR;
use crate::Result;

/// Lines of one event log entry, blank lines dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntry {
    pub lines: Vec<String>,
}

/// Lazily splits an event log into entries. Entries are terminated by a separator line; a
/// trailing entry without one is still yielded.
pub struct LogEntries<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> LogEntries<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        // the camera is not strict about encoding
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
    }
}

impl<R: BufRead> Iterator for LogEntries<R> {
    type Item = Result<LogEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut entry = LogEntry::default();
        loop {
            match self.next_line() {
                Ok(Some(line)) => {
                    if line.trim() == LOG_SEPARATOR {
                        if entry.lines.is_empty() {
                            continue;
                        }
                        return Some(Ok(entry));
                    }

                    if !line.trim().is_empty() {
                        entry.lines.push(line);
                    }
                }

                Ok(None) => {
                    self.done = true;
                    return if entry.lines.is_empty() {
                        None
                    } else {
                        Some(Ok(entry))
                    };
                }

                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

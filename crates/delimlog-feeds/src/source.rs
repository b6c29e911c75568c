//! JSON-lines batch source.
//!
//! Each input line is one entry:
//!
//! ```text
//! {"time":1700000000,"contents":[{"key":"level","value":"INFO"},{"key":"msg","value":"ok"}]}
//! ```
//!
//! Blank lines are ignored. A line that fails to parse, invalid UTF-8
//! included, is logged and skipped; one bad entry never stops the feed.

use crate::FeedError;
use delimlog_core::{LogBatch, LogEntry};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub struct JsonLinesSource<R> {
    reader: R,
    line: Vec<u8>,
    batch_size: usize,
    line_no: usize,
    skipped: usize,
    exhausted: bool,
}

impl<R: AsyncBufRead + Unpin> JsonLinesSource<R> {
    /// `batch_size` is the maximum number of entries per batch (at least 1).
    pub fn new(reader: R, batch_size: usize) -> Self {
        Self {
            reader,
            line: Vec::new(),
            batch_size: batch_size.max(1),
            line_no: 0,
            skipped: 0,
            exhausted: false,
        }
    }

    /// Next batch, or `None` once the input is exhausted. The final batch may
    /// be shorter than `batch_size`.
    pub async fn next_batch(&mut self) -> Result<Option<LogBatch>, FeedError> {
        let mut entries = Vec::with_capacity(self.batch_size);
        while !self.exhausted && entries.len() < self.batch_size {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line).await? == 0 {
                self.exhausted = true;
                break;
            }
            self.line_no += 1;
            if self.line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            // from_slice rejects non-UTF-8 input like any other syntax error
            match serde_json::from_slice::<LogEntry>(&self.line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    self.skipped += 1;
                    tracing::warn!(line = self.line_no, error = %e, "skipping malformed entry");
                }
            }
        }

        if entries.is_empty() {
            Ok(None)
        } else {
            Ok(Some(LogBatch::new(entries)))
        }
    }

    /// Lines rejected as malformed so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

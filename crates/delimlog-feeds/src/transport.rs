//! Writer-backed transport.
//!
//! Writes each record payload as-is followed by a single `\n`, flushing once
//! per batch. Record metadata is not written.

use crate::FeedError;
use delimlog_core::FormattedRecord;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub struct WriterTransport<W> {
    writer: W,
    delivered: u64,
}

impl<W: AsyncWrite + Unpin> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delivered: 0,
        }
    }

    pub async fn deliver(&mut self, records: &[FormattedRecord]) -> Result<(), FeedError> {
        for record in records {
            self.writer.write_all(&record.payload).await?;
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await?;
        self.delivered += records.len() as u64;
        Ok(())
    }

    /// Records written since construction.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

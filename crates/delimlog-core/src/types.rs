//! Core types for delimlog-core.
//!
//! This module defines the data structures that cross the stage boundary: the
//! incoming [`LogEntry`] / [`LogBatch`] handed over by the fetch side, and the
//! outgoing [`FormattedRecord`] consumed by a transport.

use bytes::Bytes;
use serde::{Deserialize, Deserializer};

/// One `key=value` pair of a log entry, as delivered by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogField {
    pub key: String,
    /// A `null` or absent value arrives as the empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl LogField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A single raw log entry.
///
/// Field order is preserved exactly as received and keys may repeat; the
/// formatter resolves repeats by letting the last occurrence win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
    /// Entry time in seconds since the Unix epoch.
    pub time: u32,
    /// Ordered field contents.
    #[serde(default)]
    pub contents: Vec<LogField>,
}

impl LogEntry {
    pub fn new(time: u32) -> Self {
        Self {
            time,
            contents: Vec::new(),
        }
    }

    /// Append a field, keeping insertion order.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.contents.push(LogField::new(key, value));
        self
    }
}

/// An ordered group of entries fetched together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBatch {
    pub entries: Vec<LogEntry>,
}

impl LogBatch {
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<LogEntry>> for LogBatch {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self::new(entries)
    }
}

/// Metadata attached to every formatted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMeta {
    /// Millisecond timestamp rendered as a decimal string.
    pub timestamp: String,
    /// Identifier of the sink this record is bound for.
    pub destination: String,
}

/// One delimited output line plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord {
    /// UTF-8 encoded delimited line. Opaque to the transport.
    pub payload: Bytes,
    pub meta: RecordMeta,
}

impl FormattedRecord {
    /// View the payload as text.
    pub fn payload_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.payload)
    }
}

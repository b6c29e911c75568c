//! Test builders — ergonomic constructors for entries, batches, and formatters.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use delimlog_core::{
    FixedClock, FormatterOptions, LogBatch, LogEntry, RecordFormatter, ScriptedSampler,
};

/// Clock value used by every formatter built through [`formatter`].
pub const FROZEN_MILLIS: i64 = 1_700_000_000_123;

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = EntryBuilder::at(1000)
///     .field("host", "web-1")
///     .field("msg", "timeout")
///     .build();
/// ```
pub struct EntryBuilder {
    entry: LogEntry,
}

impl EntryBuilder {
    pub fn at(time: u32) -> Self {
        Self {
            entry: LogEntry::new(time),
        }
    }

    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.entry = self.entry.with_field(key, value);
        self
    }

    pub fn build(self) -> LogEntry {
        self.entry
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Entry with `pairs` in order, stamped at `time` seconds.
pub fn entry(time: u32, pairs: &[(&str, &str)]) -> LogEntry {
    pairs
        .iter()
        .fold(EntryBuilder::at(time), |b, (k, v)| b.field(k, v))
        .build()
}

/// Batch of `n` entries, each with `a`, `b`, `c` set to `a{i}`, `b{i}`, `c{i}`.
pub fn abc_batch(n: usize) -> LogBatch {
    LogBatch::new(
        (0..n)
            .map(|i| {
                let (a, b, c) = (format!("a{i}"), format!("b{i}"), format!("c{i}"));
                entry(i as u32, &[("a", a.as_str()), ("b", b.as_str()), ("c", c.as_str())])
            })
            .collect(),
    )
}

/// Options for `columns` bound for the `test-store` destination.
pub fn options(columns: &str) -> FormatterOptions {
    FormatterOptions::new(columns, "test-store")
}

/// Formatter on [`FROZEN_MILLIS`] that never samples anything out unless
/// `drop-percent` says so.
pub fn formatter(options: &FormatterOptions) -> RecordFormatter {
    RecordFormatter::configure(options)
        .expect("test options must be valid")
        .with_clock(FixedClock(FROZEN_MILLIS))
}

/// Formatter replaying `draws` for its sampling gate.
pub fn scripted_formatter(options: &FormatterOptions, draws: &[u32]) -> RecordFormatter {
    formatter(options).with_sampler(ScriptedSampler::new(draws.to_vec()))
}

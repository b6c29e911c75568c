//! delimlog — delimited-record formatting stage for log-shipping pipelines.
//!
//! This crate wires the pieces from `delimlog-core` and `delimlog-feeds` into
//! a runnable pipeline so that integration tests and the binary share one
//! driver.
//!
//! # Architecture
//!
//! ```text
//! JsonLinesSource ──► mpsc ──► EventDeserializer ──► WriterTransport
//!   (reader task)               (format batch)        (write + flush)
//! ```
//!
//! The source runs on its own task; formatting and delivery happen on the
//! driver task, one batch at a time, in arrival order.

pub mod pipeline;

pub use delimlog_core::{
    Config, DelimitedStage, EventDeserializer, FormattedRecord, FormatterOptions, LogBatch,
    LogEntry, RecordFormatter,
};
pub use pipeline::{build_stage, run, PipelineStats};

//! delimlog-core — the delimited record formatting stage.
//!
//! This crate holds the data model crossing the stage boundary, the option
//! surface, and the formatter itself.
//!
//! # Flow
//!
//! ```text
//! LogBatch ──► DelimitedStage ──► RecordFormatter ──► Vec<FormattedRecord>
//!                   ▲                    ▲
//!          FormatterOptions        Clock + Sampler
//! ```
//!
//! The formatter performs no I/O. Its only ambient inputs, wall-clock time
//! and the sampling draw, are injected so they can be faked in tests.

pub mod clock;
pub mod config;
pub mod error;
pub mod formatter;
pub mod sampler;
pub mod schema;
pub mod stage;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, FormatterOptions, OptionKey, PipelineOptions};
pub use error::{ConfigError, StateError};
pub use formatter::{FormatterConfig, RecordFormatter};
pub use sampler::{RandomSampler, Sampler, ScriptedSampler};
pub use schema::ColumnSchema;
pub use stage::{DelimitedStage, DeserializerKind, EventDeserializer};
pub use types::{FormattedRecord, LogBatch, LogEntry, LogField, RecordMeta};

//! Pluggable pipeline stage wrapping a [`RecordFormatter`].
//!
//! A stage starts unconfigured and becomes usable after a successful
//! [`EventDeserializer::configure`]. The pipeline picks a stage by alias
//! through [`DeserializerKind`].

use crate::clock::{Clock, SystemClock};
use crate::config::FormatterOptions;
use crate::error::{ConfigError, StateError};
use crate::formatter::{FormatterConfig, RecordFormatter};
use crate::sampler::{RandomSampler, Sampler};
use crate::types::{FormattedRecord, LogBatch};
use std::sync::Arc;

/// A batch transform that is configured once and then invoked per batch.
pub trait EventDeserializer: Send + Sync {
    /// Validate and apply options. On error the previous state is kept.
    fn configure(&mut self, options: &FormatterOptions) -> Result<(), ConfigError>;

    fn deserialize(&self, batch: &LogBatch) -> Result<Vec<FormattedRecord>, StateError>;
}

/// Registered stage implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeserializerKind {
    PlainDelimited,
}

impl DeserializerKind {
    pub fn alias(self) -> &'static str {
        match self {
            DeserializerKind::PlainDelimited => "PLAIN_DELIMITED",
        }
    }

    /// A fresh, unconfigured stage of this kind.
    pub fn create(self) -> Box<dyn EventDeserializer> {
        match self {
            DeserializerKind::PlainDelimited => Box::new(DelimitedStage::new()),
        }
    }
}

impl std::str::FromStr for DeserializerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(DeserializerKind::PlainDelimited.alias()) {
            Ok(DeserializerKind::PlainDelimited)
        } else {
            Err(ConfigError::UnknownDeserializer(s.to_string()))
        }
    }
}

/// Stage producing plain delimited lines.
pub struct DelimitedStage {
    clock: Arc<dyn Clock>,
    sampler: Arc<dyn Sampler>,
    formatter: Option<RecordFormatter>,
}

impl DelimitedStage {
    pub fn new() -> Self {
        Self::with_sources(Arc::new(SystemClock), Arc::new(RandomSampler))
    }

    /// Stage whose formatter will read time and sampling draws from the
    /// given sources.
    pub fn with_sources(clock: Arc<dyn Clock>, sampler: Arc<dyn Sampler>) -> Self {
        Self {
            clock,
            sampler,
            formatter: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.formatter.is_some()
    }

    pub fn formatter(&self) -> Option<&RecordFormatter> {
        self.formatter.as_ref()
    }
}

impl Default for DelimitedStage {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDeserializer for DelimitedStage {
    fn configure(&mut self, options: &FormatterOptions) -> Result<(), ConfigError> {
        let config = FormatterConfig::from_options(options)?;
        self.formatter = Some(RecordFormatter::with_sources(
            config,
            Arc::clone(&self.clock),
            Arc::clone(&self.sampler),
        ));
        Ok(())
    }

    fn deserialize(&self, batch: &LogBatch) -> Result<Vec<FormattedRecord>, StateError> {
        self.formatter
            .as_ref()
            .map(|formatter| formatter.format(batch))
            .ok_or(StateError::Unconfigured)
    }
}

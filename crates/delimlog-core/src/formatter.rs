//! Delimited record formatter.
//!
//! Turns each [`LogEntry`] of a batch into one separator-joined line whose
//! layout is fixed by the configured [`ColumnSchema`]. Unknown fields are
//! dropped, missing fields render empty, embedded newlines become spaces.

use crate::clock::{Clock, SystemClock};
use crate::config::{FormatterOptions, OptionKey};
use crate::error::ConfigError;
use crate::sampler::{RandomSampler, Sampler};
use crate::schema::ColumnSchema;
use crate::types::{FormattedRecord, LogBatch, LogEntry, RecordMeta};
use bytes::Bytes;
use std::borrow::Cow;
use std::sync::Arc;

pub const DEFAULT_SEPARATOR: char = ',';

// ---------------------------------------------------------------------------
// Validated configuration
// ---------------------------------------------------------------------------

/// Validated, immutable formatter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    columns: ColumnSchema,
    use_record_time: bool,
    append_timestamp: bool,
    separator: char,
    line_end: String,
    destination: String,
    drop_percent: u8,
    local_time_position: Option<usize>,
}

impl FormatterConfig {
    /// Check raw options and build the immutable config.
    pub fn from_options(options: &FormatterOptions) -> Result<Self, ConfigError> {
        let columns = non_blank(options.columns.as_deref())
            .ok_or(ConfigError::Missing(OptionKey::Columns))?;
        let separator = separator_from(options.separator_char.as_deref())?;
        let destination = non_blank(options.destination.as_deref())
            .ok_or(ConfigError::Missing(OptionKey::Destination))?;
        let drop_percent = u8::try_from(options.drop_percent)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or(ConfigError::DropPercentOutOfRange {
                key: OptionKey::DropPercent,
                value: options.drop_percent,
            })?;

        let columns = ColumnSchema::parse(columns);

        let local_time_position = if options.append_local_time {
            let name = non_blank(options.local_time_field_name.as_deref())
                .ok_or(ConfigError::Missing(OptionKey::LocalTimeFieldName))?;
            let position = columns
                .position(name)
                .ok_or_else(|| ConfigError::UnknownLocalTimeField(name.to_string()))?;
            Some(position)
        } else {
            None
        };

        Ok(Self {
            columns,
            use_record_time: options.use_record_time,
            append_timestamp: options.append_timestamp,
            separator,
            line_end: options.line_end.clone().unwrap_or_default(),
            destination: destination.to_string(),
            drop_percent,
            local_time_position,
        })
    }

    pub fn columns(&self) -> &ColumnSchema {
        &self.columns
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn line_end(&self) -> &str {
        &self.line_end
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn drop_percent(&self) -> u8 {
        self.drop_percent
    }

    pub fn use_record_time(&self) -> bool {
        self.use_record_time
    }

    pub fn append_timestamp(&self) -> bool {
        self.append_timestamp
    }

    /// Row position overwritten with local time, if enabled.
    pub fn local_time_position(&self) -> Option<usize> {
        self.local_time_position
    }

    /// Output row width: every declared column, plus the appended timestamp.
    pub fn width(&self) -> usize {
        self.columns.len() + usize::from(self.append_timestamp)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// A one-character value is taken as is (so `"\t"` and `" "` work); anything
/// longer is trimmed and must then be exactly one character.
fn separator_from(value: Option<&str>) -> Result<char, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_SEPARATOR);
    };
    single_char(value)
        .or_else(|| single_char(value.trim()))
        .ok_or_else(|| ConfigError::InvalidSeparator {
            key: OptionKey::SeparatorChar,
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Formatter
// ---------------------------------------------------------------------------

/// Formats log batches into delimited records.
///
/// `format` takes `&self` and builds a fresh row per entry, so one formatter
/// may be shared across threads.
#[derive(Clone)]
pub struct RecordFormatter {
    config: FormatterConfig,
    clock: Arc<dyn Clock>,
    sampler: Arc<dyn Sampler>,
}

impl std::fmt::Debug for RecordFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordFormatter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RecordFormatter {
    /// Validate `options` and build a formatter on the system clock and the
    /// thread-local random source.
    pub fn configure(options: &FormatterOptions) -> Result<Self, ConfigError> {
        FormatterConfig::from_options(options).map(Self::new)
    }

    pub fn new(config: FormatterConfig) -> Self {
        Self::with_sources(config, Arc::new(SystemClock), Arc::new(RandomSampler))
    }

    pub fn with_sources(
        config: FormatterConfig,
        clock: Arc<dyn Clock>,
        sampler: Arc<dyn Sampler>,
    ) -> Self {
        let duplicates = config.columns.duplicates();
        if !duplicates.is_empty() {
            tracing::warn!(
                ?duplicates,
                "duplicate column names; only the last declaration of each is populated"
            );
        }
        tracing::info!(
            separator = ?config.separator,
            width = config.width(),
            destination = %config.destination,
            drop_percent = config.drop_percent,
            "delimited formatter configured"
        );
        Self {
            config,
            clock,
            sampler,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_sampler(mut self, sampler: impl Sampler + 'static) -> Self {
        self.sampler = Arc::new(sampler);
        self
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.width()
    }

    /// Format a batch. Output keeps input order; sampled-out entries are absent.
    pub fn format(&self, batch: &LogBatch) -> Vec<FormattedRecord> {
        let mut records = Vec::with_capacity(batch.len());
        for entry in &batch.entries {
            if self.sampled_out() {
                continue;
            }
            records.push(self.format_entry(entry));
        }
        tracing::debug!(
            entries = batch.len(),
            records = records.len(),
            dropped = batch.len() - records.len(),
            destination = %self.config.destination,
            "formatted batch"
        );
        records
    }

    /// Format one entry, bypassing the sampling gate.
    pub fn format_entry(&self, entry: &LogEntry) -> FormattedRecord {
        let width = self.config.width();
        let mut row: Vec<Option<Cow<'_, str>>> = vec![None; width];

        for field in &entry.contents {
            if let Some(position) = self.config.columns.position(&field.key) {
                row[position] = Some(single_line(&field.value));
            }
        }

        let local_time = self.clock.now_millis().to_string();
        let timestamp = if self.config.use_record_time {
            (u64::from(entry.time) * 1000).to_string()
        } else {
            local_time.clone()
        };

        if self.config.append_timestamp {
            row[width - 1] = Some(Cow::Owned(timestamp.clone()));
        }
        // after the timestamp column so it wins if both land on the same slot
        if let Some(position) = self.config.local_time_position {
            row[position] = Some(Cow::Owned(local_time));
        }

        FormattedRecord {
            payload: Bytes::from(self.join(&row)),
            meta: RecordMeta {
                timestamp,
                destination: self.config.destination.clone(),
            },
        }
    }

    fn sampled_out(&self) -> bool {
        self.config.drop_percent > 0
            && self.sampler.draw_percent() < u32::from(self.config.drop_percent)
    }

    fn join(&self, row: &[Option<Cow<'_, str>>]) -> String {
        let cells: usize = row.iter().flatten().map(|cell| cell.len()).sum();
        let mut line = String::with_capacity(cells + row.len() + self.config.line_end.len());
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push(self.config.separator);
            }
            if let Some(cell) = cell {
                line.push_str(cell);
            }
        }
        line.push_str(&self.config.line_end);
        line
    }
}

/// Replace embedded newlines so one entry never spans several output lines.
fn single_line(value: &str) -> Cow<'_, str> {
    if value.contains('\n') {
        Cow::Owned(value.replace('\n', " "))
    } else {
        Cow::Borrowed(value)
    }
}

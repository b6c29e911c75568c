//! Configuration types for delimlog.
//!
//! [`Config::load`] layers an optional TOML file and `DELIMLOG_*` environment
//! variables on top of the embedded defaults. [`Config::defaults`] returns the
//! same defaults without touching the filesystem (useful in tests).
//!
//! The options here are raw and unvalidated; the formatter checks them when it
//! is configured (see [`crate::formatter::FormatterConfig::from_options`]).

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[formatter]
use-record-time   = false
separator-char    = ","
line-end          = ""
drop-percent      = 0
append-timestamp  = false
append-local-time = false

[pipeline]
deserializer     = "PLAIN_DELIMITED"
batch-size       = 256
channel-capacity = 16
"#;

const ENV_PREFIX: &str = "DELIMLOG";

// ---------------------------------------------------------------------------
// Option names
// ---------------------------------------------------------------------------

/// Every option recognised by the delimited formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Columns,
    UseRecordTime,
    SeparatorChar,
    LineEnd,
    Destination,
    DropPercent,
    AppendTimestamp,
    AppendLocalTime,
    LocalTimeFieldName,
}

impl OptionKey {
    pub const ALL: [OptionKey; 9] = [
        OptionKey::Columns,
        OptionKey::UseRecordTime,
        OptionKey::SeparatorChar,
        OptionKey::LineEnd,
        OptionKey::Destination,
        OptionKey::DropPercent,
        OptionKey::AppendTimestamp,
        OptionKey::AppendLocalTime,
        OptionKey::LocalTimeFieldName,
    ];

    /// Key as spelled in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Columns => "columns",
            OptionKey::UseRecordTime => "use-record-time",
            OptionKey::SeparatorChar => "separator-char",
            OptionKey::LineEnd => "line-end",
            OptionKey::Destination => "destination",
            OptionKey::DropPercent => "drop-percent",
            OptionKey::AppendTimestamp => "append-timestamp",
            OptionKey::AppendLocalTime => "append-local-time",
            OptionKey::LocalTimeFieldName => "local-time-field-name",
        }
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub formatter: FormatterOptions,
    #[serde(default)]
    pub pipeline: PipelineOptions,
}

/// `[formatter]` section. Field names map one-to-one onto [`OptionKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FormatterOptions {
    pub columns: Option<String>,
    pub use_record_time: bool,
    pub separator_char: Option<String>,
    pub line_end: Option<String>,
    pub destination: Option<String>,
    pub drop_percent: i64,
    pub append_timestamp: bool,
    pub append_local_time: bool,
    pub local_time_field_name: Option<String>,
}

impl FormatterOptions {
    /// Minimal options: a column list and a destination, everything else default.
    pub fn new(columns: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            columns: Some(columns.into()),
            destination: Some(destination.into()),
            ..Self::default()
        }
    }
}

/// `[pipeline]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PipelineOptions {
    #[serde(default = "default_deserializer")]
    pub deserializer: String,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_deserializer() -> String { "PLAIN_DELIMITED".to_string() }
fn default_batch_size() -> usize { 256 }
fn default_channel_capacity() -> usize { 16 }

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            deserializer: default_deserializer(),
            batch_size: default_batch_size(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Load the embedded defaults, then `path` (if given), then the
    /// `DELIMLOG_` environment (`DELIMLOG_FORMATTER__SEPARATOR_CHAR=...`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// [`Config::load`] reading `DELIMLOG_*` variables from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder
            .add_source(
                // SEPARATOR_CHAR -> separator_char -> separator-char
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(config::Case::Kebab)
                    .source(env),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

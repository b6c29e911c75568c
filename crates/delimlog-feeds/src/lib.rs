//! delimlog-feeds — batch sources and record transports for delimlog.
//!
//! A source reads raw log entries and groups them into [`LogBatch`]es for the
//! formatting stage; a transport takes the stage's [`FormattedRecord`]s and
//! writes them out unchanged.
//!
//! [`LogBatch`]: delimlog_core::LogBatch
//! [`FormattedRecord`]: delimlog_core::FormattedRecord

pub mod source;
pub mod transport;

pub use source::JsonLinesSource;
pub use transport::WriterTransport;

/// Errors raised by feed adapters.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

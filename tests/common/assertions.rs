//! Domain-specific assertion macros for delimlog harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* record broke *which* layout rule.

/// Assert that a `FormattedRecord` payload equals an expected line.
///
/// ```rust
/// assert_payload!(record, "1,2,3");
/// ```
#[macro_export]
macro_rules! assert_payload {
    ($record:expr, $expected:expr) => {{
        let record: &delimlog_core::FormattedRecord = &$record;
        let actual = record
            .payload_str()
            .expect("payload must be valid UTF-8");
        pretty_assertions::assert_eq!(actual, $expected, "payload of {:?}", record.meta);
    }};
}

/// Assert that a payload splits into exactly `width` cells on `sep`.
#[macro_export]
macro_rules! assert_width {
    ($record:expr, $sep:expr, $width:expr) => {{
        let record: &delimlog_core::FormattedRecord = &$record;
        let actual = record.payload_str().expect("payload must be valid UTF-8");
        let cells = actual.split($sep).count();
        if cells != $width {
            panic!(
                "assert_width! failed:\n  expected: {} cells\n  actual:   {}\n  payload: {:?}",
                $width, cells, actual
            );
        }
    }};
}

/// Split a record payload into its cells.
pub fn cells(record: &delimlog_core::FormattedRecord, sep: char) -> Vec<String> {
    record
        .payload_str()
        .expect("payload must be valid UTF-8")
        .split(sep)
        .map(str::to_owned)
        .collect()
}

/// Payloads of `records`, in order.
pub fn payloads(records: &[delimlog_core::FormattedRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.payload_str().expect("payload must be valid UTF-8").to_owned())
        .collect()
}

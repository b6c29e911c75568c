//! Static inputs used across harnesses.

/// Columns of a typical access-log projection.
pub const ACCESS_COLUMNS: &str = "time,host,method,path,status,latency_ms";

/// JSON-lines input as emitted by the upstream fetcher: one entry per line,
/// including a blank line, a malformed line, and an embedded newline.
pub const ACCESS_JSONL: &str = r#"{"time":1700000000,"contents":[{"key":"host","value":"web-1"},{"key":"method","value":"GET"},{"key":"path","value":"/healthz"},{"key":"status","value":"200"},{"key":"latency_ms","value":"1"}]}
{"time":1700000001,"contents":[{"key":"host","value":"web-2"},{"key":"method","value":"POST"},{"key":"path","value":"/api/v1/orders"},{"key":"status","value":"201"},{"key":"latency_ms","value":"38"},{"key":"trace_id","value":"abc"}]}

{"time":1700000002,"contents":[{"key":"host","value":"web-1"},{"key":"status","value":"500"},{"key":"path","value":"/api/v1/pay\nments"}]}
this line is not json
{"time":1700000003,"contents":[]}
"#;

/// Entries in [`ACCESS_JSONL`] that parse.
pub const ACCESS_JSONL_ENTRIES: usize = 4;


/// [`ACCESS_JSONL`] with a line of invalid UTF-8 spliced in after the first
/// entry. Parses to the same entries; one more line is skipped.
pub fn access_jsonl_with_binary_line() -> Vec<u8> {
    let (first, rest) = ACCESS_JSONL.split_at(ACCESS_JSONL.find('\n').unwrap() + 1);
    [first.as_bytes(), &b"\xff\xfe garbage\n"[..], rest.as_bytes()].concat()
}

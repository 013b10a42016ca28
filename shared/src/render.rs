//! JSON report rendering
//!
//! The benchmarking harness parses the emitted block literally: field order,
//! two-space indentation, and fixed six-decimal floats are all part of the
//! contract, so floats bypass serde_json's shortest-roundtrip formatting.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};

/// Render a report as the JSON block the harness expects
pub fn to_json_block<T: Serialize>(report: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, ReportFormatter::new());
    report.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("JSON output is UTF-8"))
}

/// Single-line payload reported on stdout for run-level failures
pub fn error_payload(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Pretty formatter that pins floats to six decimal places
pub struct ReportFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl ReportFormatter<'_> {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::new(),
        }
    }
}

impl Default for ReportFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for ReportFormatter<'_> {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        write!(writer, "{value:.6}")
    }

    // The indentation state machine lives in PrettyFormatter; forward it
    // wholesale so only float formatting differs.

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{CumulativeReport, Gflops, IntervalReport};

    #[test]
    fn test_cumulative_block() {
        let report = CumulativeReport {
            arch: "x86".to_string(),
            interval: "1s".to_string(),
            bops: 420,
        };
        let block = to_json_block(&report).unwrap();
        assert_eq!(
            block,
            "{\n  \"arch\": \"x86\",\n  \"interval\": \"1s\",\n  \"BOPs\": 420\n}"
        );
    }

    #[test]
    fn test_interval_block_pins_six_decimals() {
        let report = IntervalReport {
            arch: "x86".to_string(),
            interval_duration: 1.0,
            bops: 4.2e-7,
            gflops: Gflops::PerSecond(1.25),
        };
        let block = to_json_block(&report).unwrap();
        assert_eq!(
            block,
            "{\n  \"arch\": \"x86\",\n  \"interval_duration\": 1.000000,\n  \"BOPs\": 0.000000,\n  \"GFLOPS\": 1.250000\n}"
        );
    }

    #[test]
    fn test_interval_block_arm_gflops_sentinel() {
        let report = IntervalReport {
            arch: "arm".to_string(),
            interval_duration: 0.5,
            bops: 1.5,
            gflops: Gflops::NotAvailable,
        };
        let block = to_json_block(&report).unwrap();
        assert_eq!(
            block,
            "{\n  \"arch\": \"arm\",\n  \"interval_duration\": 0.500000,\n  \"BOPs\": 1.500000,\n  \"GFLOPS\": \"N/A\"\n}"
        );
    }

    #[test]
    fn test_error_payload_is_single_line() {
        let payload = error_payload("no data parsed");
        assert_eq!(payload, r#"{"error":"no data parsed"}"#);
    }
}

//! perf CSV trace parser
//!
//! Reads the interval-sampled counter trace emitted by the upstream
//! profiling tool. The format is owned by that tool, not by us, so the
//! parser is tolerant by design: rows it cannot make sense of are dropped,
//! never fatal.

mod columns;

pub use columns::ColumnLayout;

use crate::error::MetricsError;
use crate::types::sample::Sample;
use csv::StringRecord;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

/// Placeholder strings the profiler emits when a counter could not be read;
/// they count as a reading of zero
pub const SENTINEL_VALUES: [&str; 2] = ["<not supported>", "<not counted>"];

/// Parse a trace file into samples, preserving row order
pub fn parse_trace(path: &Path, layout: ColumnLayout) -> Result<Vec<Sample>, MetricsError> {
    let file = File::open(path).map_err(|source| MetricsError::OpenTrace {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_reader(BufReader::new(file), layout))
}

/// Parse trace rows from any reader
///
/// Comment (`#`) and blank lines are skipped. A malformed row is skipped
/// with a debug log; it never aborts the scan.
pub fn parse_reader<R: io::Read>(reader: R, layout: ColumnLayout) -> Vec<Sample> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                debug!("Skipping unreadable trace row: {}", err);
                continue;
            }
        };
        match parse_record(&record, layout) {
            Some(sample) => samples.push(sample),
            None => debug!("Skipping malformed trace row: {:?}", record),
        }
    }
    samples
}

/// Decode one record, or `None` when the row is malformed for this layout
fn parse_record(record: &StringRecord, layout: ColumnLayout) -> Option<Sample> {
    if record.len() < layout.min_fields() {
        return None;
    }

    let timestamp: f64 = record.get(0)?.parse().ok()?;

    let raw = record.get(1)?;
    let value = if SENTINEL_VALUES.contains(&raw) {
        0.0
    } else {
        raw.parse().ok()?
    };

    let event = layout.event_name(record)?;

    Some(Sample {
        timestamp,
        event: event.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str, layout: ColumnLayout) -> Vec<Sample> {
        parse_reader(input.as_bytes(), layout)
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let input = "# started on Fri Aug  8 10:00:00 2025\n\n1.0,100,,inst_retired\n";
        let samples = parse(input, ColumnLayout::UnitAware);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].event, "inst_retired");
        assert_eq!(samples[0].value, 100.0);
    }

    #[test]
    fn test_sentinel_values_count_as_zero() {
        let input = "1.0,<not supported>,,br_retired\n2.0,<not counted>,,br_retired\n";
        let samples = parse(input, ColumnLayout::UnitAware);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].value, 0.0);
        assert_eq!(samples[1].value, 0.0);
    }

    #[test]
    fn test_bad_timestamp_or_value_skips_row() {
        let input = "oops,100,,inst_retired\n1.0,bogus,,inst_retired\n2.0,7,,inst_retired\n";
        let samples = parse(input, ColumnLayout::UnitAware);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp, 2.0);
        assert_eq!(samples[0].value, 7.0);
    }

    #[test]
    fn test_short_rows_skipped() {
        let unit_aware = parse("1.0\n", ColumnLayout::UnitAware);
        assert!(unit_aware.is_empty());

        // The fixed layout needs three fields, so a bare time,value row drops.
        let fixed = parse("1.0,100\n", ColumnLayout::Fixed);
        assert!(fixed.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let input = "     1.000478,  250 , , inst_retired \n";
        let samples = parse(input, ColumnLayout::UnitAware);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp, 1.000478);
        assert_eq!(samples[0].value, 250.0);
        assert_eq!(samples[0].event, "inst_retired");
    }

    #[test]
    fn test_row_order_preserved() {
        let input = "2.0,1,,a\n1.0,2,,b\n";
        let samples = parse(input, ColumnLayout::UnitAware);
        assert_eq!(samples[0].timestamp, 2.0);
        assert_eq!(samples[1].timestamp, 1.0);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let err = parse_trace(Path::new("/nonexistent/trace.csv"), ColumnLayout::Fixed)
            .unwrap_err();
        assert!(matches!(err, MetricsError::OpenTrace { .. }));
    }
}

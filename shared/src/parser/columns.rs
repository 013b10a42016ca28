//! Event-name column strategies
//!
//! The profiler's CSV layout shifts with tool version and with whether a
//! unit column is present, so locating the event-name column is heuristic.
//! Each known layout is kept as its own selectable strategy; adding a new
//! layout must not touch the row scan.

use csv::StringRecord;

/// Unit tokens the profiler inserts between the value and event columns
const UNIT_TOKENS: [&str; 3] = ["Joules", "Watts", "Seconds"];

/// How to locate the event-name column in a trace row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// Last field by default; a unit token in field 2 shifts the name to
    /// field 3, and a blank field 2 also falls through to field 3
    UnitAware,

    /// Fixed shape: field 2 in a 3-field row, field 3 otherwise
    Fixed,
}

impl ColumnLayout {
    /// Minimum fields a row must have before the strategy applies
    pub fn min_fields(&self) -> usize {
        match self {
            ColumnLayout::UnitAware => 2,
            ColumnLayout::Fixed => 3,
        }
    }

    /// Locate the event name, or `None` when the row shape rules it out
    pub fn event_name<'r>(&self, record: &'r StringRecord) -> Option<&'r str> {
        match self {
            ColumnLayout::UnitAware => {
                if record.len() > 3 && UNIT_TOKENS.contains(&record.get(2)?) {
                    record.get(3)
                } else if record.len() >= 3 {
                    match record.get(2)? {
                        // A 3-field row with a blank middle has no field 3;
                        // the row is unusable and gets skipped upstream.
                        "" => record.get(3),
                        event => Some(event),
                    }
                } else {
                    record.iter().last()
                }
            }
            ColumnLayout::Fixed => {
                if record.len() == 3 {
                    record.get(2)
                } else {
                    record.get(3)
                }
            }
        }
    }
}

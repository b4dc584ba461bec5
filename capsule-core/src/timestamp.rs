//! The shared snapshot instant.

use std::fmt;

use chrono::{Local, NaiveDateTime};

/// Format used for the timestamp prefix of every archived file name.
pub const TIMESTAMP_FORMAT: &str = "%y_%m_%d_%H_%M_%S";

/// The single instant a snapshot run is stamped with.
///
/// Captured once when the run starts and handed to the [`Hierarchy`](crate::model::Hierarchy),
/// so every path computed during the run carries the same timestamp no matter
/// how long the fetches take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotTime(NaiveDateTime);

impl SnapshotTime {
    pub fn now() -> Self {
        SnapshotTime(Local::now().naive_local())
    }

    pub fn at(instant: NaiveDateTime) -> Self {
        SnapshotTime(instant)
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for SnapshotTime {
    fn from(instant: NaiveDateTime) -> Self {
        SnapshotTime(instant)
    }
}

impl fmt::Display for SnapshotTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_formats_two_digit_fields() {
        let instant = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(SnapshotTime::at(instant).to_string(), "24_01_01_00_00_00");
    }

    #[test]
    fn test_keeps_seconds_resolution() {
        let instant = NaiveDate::from_ymd_opt(2031, 12, 9)
            .unwrap()
            .and_hms_opt(17, 4, 59)
            .unwrap();

        assert_eq!(SnapshotTime::from(instant).to_string(), "31_12_09_17_04_59");
    }
}

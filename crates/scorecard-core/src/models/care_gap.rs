use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GapStatus {
    Open,
    Closed,
}

impl fmt::Display for GapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapStatus::Open => write!(f, "Open"),
            GapStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// A patient missing a recommended quality action under one measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CareGap {
    pub gap_id: String,
    pub measure_name: String,
    pub measure_category: String,
    pub status: GapStatus,
    pub site_location: String,
    pub payer_type: String,
    pub provider_name: String,
    #[ts(type = "string")]
    pub open_date: jiff::civil::Date,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub closed_date: Option<jiff::civil::Date>,
}

impl CareGap {
    /// Days the gap has been (or was) open.
    ///
    /// Closed gaps count up to their close date; open gaps up to `as_of`.
    /// A date earlier than `open_date` counts as zero days.
    pub fn days_open(&self, as_of: jiff::civil::Date) -> u32 {
        let end = match (self.status, self.closed_date) {
            (GapStatus::Closed, Some(closed)) => closed,
            _ => as_of,
        };
        let days = (end - self.open_date).get_days();
        u32::try_from(days).unwrap_or(0)
    }

    pub fn is_closed(&self) -> bool {
        self.status == GapStatus::Closed
    }
}

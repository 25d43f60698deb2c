//! Attendance observation and status models.

use serde::{Deserialize, Serialize};

/// Raw facts recorded for one employee-day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceObservation {
    /// Whether a check-in was recorded.
    pub has_check_in: bool,
    /// Whether a check-out was recorded.
    pub has_check_out: bool,
    /// The status string stored with the record, if any (e.g., "late").
    #[serde(default)]
    pub recorded_status_hint: Option<String>,
    /// Whether the observed day is the current day.
    pub is_today: bool,
}

/// The normalized attendance status for one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Attended.
    Present,
    /// Attended, but arrived late.
    Late,
    /// On approved leave.
    Leave,
    /// Public or company holiday.
    Holiday,
    /// Weekly rest day.
    Weekend,
    /// Did not attend.
    Absent,
}

impl AttendanceStatus {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::Holiday => "Holiday",
            AttendanceStatus::Weekend => "Weekend",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

//! Attendance status classification.
//!
//! Every view that shows an attendance status (single employee, team,
//! report, export) derives it through [`classify_status`].

use chrono::NaiveDate;

use crate::models::{AttendanceObservation, AttendanceStatus};

/// Maps a recorded status hint onto a status that overrides the base rule.
fn override_for(hint: &str) -> Option<AttendanceStatus> {
    match hint {
        "holiday" => Some(AttendanceStatus::Holiday),
        "leave" => Some(AttendanceStatus::Leave),
        "weekend" => Some(AttendanceStatus::Weekend),
        "absent" => Some(AttendanceStatus::Absent),
        _ => None,
    }
}

/// Derives the normalized status for one employee-day.
///
/// The base status comes from check-in/check-out presence:
///
/// | check-in | check-out | result |
/// |----------|-----------|--------|
/// | no       | any       | `Absent`, or `Late`/`Present` when hinted |
/// | yes      | no        | `Present` while the day is today, else `Absent` |
/// | yes      | yes       | `Present`, or `Late` when hinted |
///
/// A hint of `holiday`, `leave`, `weekend` or `absent` then overrides the
/// base status. Hints are compared case-insensitively; unknown hints are
/// ignored.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify_status;
/// use payroll_engine::models::{AttendanceObservation, AttendanceStatus};
///
/// let open_day = AttendanceObservation {
///     has_check_in: true,
///     has_check_out: false,
///     recorded_status_hint: None,
///     is_today: false,
/// };
/// assert_eq!(classify_status(&open_day), AttendanceStatus::Absent);
/// ```
pub fn classify_status(obs: &AttendanceObservation) -> AttendanceStatus {
    let hint = obs
        .recorded_status_hint
        .as_deref()
        .map(|h| h.trim().to_ascii_lowercase());
    let hint = hint.as_deref();

    let base = match (obs.has_check_in, obs.has_check_out) {
        (false, _) => match hint {
            Some("late") => AttendanceStatus::Late,
            Some("present") => AttendanceStatus::Present,
            _ => AttendanceStatus::Absent,
        },
        (true, false) if obs.is_today => AttendanceStatus::Present,
        (true, false) => AttendanceStatus::Absent,
        (true, true) => match hint {
            Some("late") => AttendanceStatus::Late,
            _ => AttendanceStatus::Present,
        },
    };

    hint.and_then(override_for).unwrap_or(base)
}

/// Classifies a record for `day`, treating it as open when `day == today`.
pub fn classify_status_on(
    has_check_in: bool,
    has_check_out: bool,
    recorded_status_hint: Option<&str>,
    day: NaiveDate,
    today: NaiveDate,
) -> AttendanceStatus {
    classify_status(&AttendanceObservation {
        has_check_in,
        has_check_out,
        recorded_status_hint: recorded_status_hint.map(str::to_string),
        is_today: day == today,
    })
}

//! Quote latency monitor.
//!
//! The broker stamps each quote with a wall-clock time (`14:03:27`). The age
//! of that stamp tells whether the quote on screen is current.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A quote stamp this far in the future belongs to the previous day.
const FUTURE_TOLERANCE_SECS: i64 = 60;

/// Age thresholds in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyThresholds {
    pub warning_secs: i64,
    pub critical_secs: i64,
}

impl Default for LatencyThresholds {
    fn default() -> Self {
        Self {
            warning_secs: 3,
            critical_secs: 5,
        }
    }
}

/// Classification of a quote's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyState {
    Good,
    Warning,
    Critical,
}

/// Measured age of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub age_secs: i64,
    pub state: LatencyState,
}

impl Latency {
    /// Classifies an age against the thresholds. Critical wins over warning.
    pub fn classify(age_secs: i64, thresholds: &LatencyThresholds) -> Self {
        let age_secs = age_secs.max(0);
        let state = if age_secs >= thresholds.critical_secs {
            LatencyState::Critical
        } else if age_secs >= thresholds.warning_secs {
            LatencyState::Warning
        } else {
            LatencyState::Good
        };
        Self { age_secs, state }
    }

    /// `12s`, or `2m 5s` once the age exceeds a minute.
    pub fn display(&self) -> String {
        if self.age_secs > 60 {
            format!("{}m {}s", self.age_secs / 60, self.age_secs % 60)
        } else {
            format!("{}s", self.age_secs)
        }
    }
}

/// Finds the first `H:MM:SS` or `HH:MM:SS` time in `text`.
///
/// Only the leftmost match is considered; an out-of-range match such as
/// `25:00:00` yields `None`.
pub fn find_quote_time(text: &str) -> Option<NaiveTime> {
    let bytes = text.as_bytes();
    let (hour, minute, second) = (0..bytes.len()).find_map(|start| time_at(bytes, start))?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

fn time_at(bytes: &[u8], start: usize) -> Option<(u32, u32, u32)> {
    let rest = &bytes[start..];
    let hour_len = match rest {
        [a, b, b':', ..] if a.is_ascii_digit() && b.is_ascii_digit() => 2,
        [a, b':', ..] if a.is_ascii_digit() => 1,
        _ => return None,
    };
    match &rest[hour_len + 1..] {
        [m1, m2, b':', s1, s2, ..] if [m1, m2, s1, s2].iter().all(|d| d.is_ascii_digit()) => Some((
            digits(&rest[..hour_len]),
            digits(&[*m1, *m2]),
            digits(&[*s1, *s2]),
        )),
        _ => None,
    }
}

fn digits(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0'))
}

/// Places a quote time on today's date relative to `now`, moving it to the
/// previous day if it would lie more than a minute in the future.
pub fn resolve_quote_time(time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let stamped = now.date().and_time(time);
    if stamped > now + Duration::seconds(FUTURE_TOLERANCE_SECS) {
        stamped - Duration::days(1)
    } else {
        stamped
    }
}

/// Measures the age of the quote time found in `text`.
pub fn measure(text: &str, now: NaiveDateTime, thresholds: &LatencyThresholds) -> Option<Latency> {
    let time = find_quote_time(text)?;
    let stamped = resolve_quote_time(time, now);
    let age = (now - stamped).num_seconds();
    Some(Latency::classify(age, thresholds))
}

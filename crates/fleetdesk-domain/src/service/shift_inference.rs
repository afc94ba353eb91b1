//! Shift classification from raw roster values
//!
//! Roster exports carry the shift either as a literal "Day"/"Night" or
//! as a working-hours range like "11:00 - 20:00". Anything else falls
//! back to Day, and the fallback is reported to the caller instead of
//! being swallowed.

use crate::model::Shift;

/// Outcome of classifying a raw shift value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftInference {
    pub shift: Shift,
    /// The raw value, echoed back when classification fell through to
    /// the Day default. `None` for recognized inputs.
    pub fallback: Option<String>,
}

impl ShiftInference {
    fn recognized(shift: Shift) -> Self {
        Self {
            shift,
            fallback: None,
        }
    }
}

/// Classify a raw shift value.
///
/// Three tiers, in order:
/// 1. case-insensitive "day" / "night" is used directly;
/// 2. a value containing `-` is treated as a time range "HH:MM - HH:MM"
///    and classified by its starting hour: before 18:00 is Day, 18:00
///    and later is Night (an unparseable start hour also lands on
///    Night, matching the legacy behavior);
/// 3. everything else defaults to Day, with the fallback recorded.
pub fn infer_shift(raw: &str) -> ShiftInference {
    let value = raw.trim();

    if value.eq_ignore_ascii_case("day") {
        return ShiftInference::recognized(Shift::Day);
    }
    if value.eq_ignore_ascii_case("night") {
        return ShiftInference::recognized(Shift::Night);
    }

    if value.contains('-') {
        let start = value.split('-').next().unwrap_or("").trim();
        let shift = match parse_start_hour(start) {
            Some(hour) if hour < 18 => Shift::Day,
            _ => Shift::Night,
        };
        return ShiftInference::recognized(shift);
    }

    ShiftInference {
        shift: Shift::Day,
        fallback: Some(value.to_string()),
    }
}

/// Leading-digits parse of the hour in "HH:MM", like the legacy
/// `parseInt` did.
fn parse_start_hour(start: &str) -> Option<u32> {
    let hour_part = start.split(':').next().unwrap_or("").trim();
    let digits: String = hour_part
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

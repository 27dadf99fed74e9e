use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Two-week alternation used by recurring lessons. Lessons tagged with a
/// parity only occur in the matching week; untagged lessons occur weekly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekParity {
    Numerator,
    Denominator,
}

impl WeekParity {
    pub fn opposite(self) -> Self {
        match self {
            WeekParity::Numerator => WeekParity::Denominator,
            WeekParity::Denominator => WeekParity::Numerator,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeekParity::Numerator => "numerator",
            WeekParity::Denominator => "denominator",
        }
    }

    pub fn from_str(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "numerator" => Some(WeekParity::Numerator),
            "denominator" => Some(WeekParity::Denominator),
            _ => None,
        }
    }
}

impl std::fmt::Display for WeekParity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar-derived parity: odd ISO week numbers are numerator weeks, even
/// weeks are denominator weeks. Fixed convention, not user-configurable.
pub fn week_parity(date: NaiveDate) -> WeekParity {
    if date.iso_week().week() % 2 == 1 {
        WeekParity::Numerator
    } else {
        WeekParity::Denominator
    }
}

/// Applies the stored parity pin to a calendar-derived parity.
///
/// The flag records whether the calendar parity agreed with the user's
/// choice at the moment the pin was set (see [`pin_flag`]). `Some(false)`
/// therefore inverts the whole alternation instead of freezing a constant:
/// the resolved parity keeps alternating week by week relative to the pinned
/// anchor. `None` means auto mode.
pub fn apply_override(base: WeekParity, flag: Option<bool>) -> WeekParity {
    match flag {
        Some(false) => base.opposite(),
        _ => base,
    }
}

/// Resolved parity for a date under an optional pin. Convenience over
/// [`week_parity`] + [`apply_override`].
pub fn parity_for(date: NaiveDate, flag: Option<bool>) -> WeekParity {
    apply_override(week_parity(date), flag)
}

/// Converts a user's parity choice on `date` into the flag stored in
/// settings. `None` returns the calculator to auto mode.
pub fn pin_flag(date: NaiveDate, choice: Option<WeekParity>) -> Option<bool> {
    choice.map(|parity| week_parity(date) == parity)
}

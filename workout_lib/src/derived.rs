//! Fields computed once from the raw input when a workout is created.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{input::RawWorkoutInput, workout::DurationParts};

/// How the part of the pace after the colon is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceMode {
    /// Fraction of a minute times 100, unpadded. Matches what the first version
    /// of the logger displayed, so `5.5` min/km reads `5:50`.
    #[default]
    Legacy,
    /// Real seconds, zero padded: `5.5` min/km reads `5:30`.
    Seconds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// Day of the week as a number (Sunday = 0) followed by the month name.
    #[default]
    WeekdayNumber,
    /// Day of the month followed by the month name.
    DayOfMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivationRules {
    pub pace: PaceMode,
    pub date: DateStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pace {
    pub minutes: i64,
    pub sub_unit: i64,
    pub mode: PaceMode,
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            PaceMode::Legacy => write!(f, "{}:{}", self.minutes, self.sub_unit),
            PaceMode::Seconds => write!(f, "{}:{:02}", self.minutes, self.sub_unit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedFields {
    pub duration: String,
    /// `None` when the distance is not positive.
    pub pace: Option<Pace>,
    pub title: String,
    pub date: String,
}

pub fn compute_derived_fields(input: &RawWorkoutInput, today: NaiveDate, rules: &DerivationRules) -> DerivedFields {
    DerivedFields {
        duration: input.duration.to_string(),
        pace: compute_pace(input.distance, &input.duration, rules.pace),
        title: capitalize(input.kind.as_str()),
        date: format_date(today, rules.date),
    }
}

pub fn compute_pace(distance: f64, duration: &DurationParts, mode: PaceMode) -> Option<Pace> {
    if !distance.is_finite() || distance <= 0. {
        return None;
    }

    match mode {
        PaceMode::Legacy => {
            let minutes_per_km = duration.total_seconds() as f64 / 60. / distance;
            let minutes = minutes_per_km.floor();
            Some(Pace {
                minutes: minutes as i64,
                sub_unit: ((minutes_per_km - minutes) * 100.).floor() as i64,
                mode,
            })
        }
        PaceMode::Seconds => {
            // Floor whole seconds per km, not the fraction of a float minute
            let seconds_per_km = (duration.total_seconds() as f64 / distance).floor() as i64;
            Some(Pace {
                minutes: seconds_per_km / 60,
                sub_unit: seconds_per_km % 60,
                mode,
            })
        }
    }
}

pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::WeekdayNumber => format!("{} {}", date.weekday().num_days_from_sunday(), date.format("%B")),
        DateStyle::DayOfMonth => date.format("%-d %B").to_string(),
    }
}

/// First letter upper case, the rest lower case.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

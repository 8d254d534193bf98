use crate::{
    error::ValidationError,
    workout::{Coords, DurationParts, WorkoutType},
};

/// Raw strings as read from the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub kind: String,
    pub distance: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub cadence: String,
}

impl FormValues {
    /// What the form holds after a successful submit: the numbers are cleared,
    /// the type and duration stay as the user left them.
    pub fn cleared_after_submit(&self) -> Self {
        Self {
            distance: String::new(),
            cadence: String::new(),
            ..self.clone()
        }
    }
}

/// Parsed form input, not yet validated for the distance/cadence rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWorkoutInput {
    pub coords: Coords,
    pub distance: f64,
    pub duration: DurationParts,
    pub cadence: f64,
    pub kind: WorkoutType,
}

impl RawWorkoutInput {
    pub fn from_form(coords: Coords, values: &FormValues) -> Result<Self, ValidationError> {
        Ok(Self {
            coords,
            distance: parse_number(&values.distance),
            duration: DurationParts {
                hours: parse_duration_part("hours", &values.hours)?,
                minutes: parse_duration_part("minutes", &values.minutes)?,
                seconds: parse_duration_part("seconds", &values.seconds)?,
            },
            cadence: parse_number(&values.cadence),
            kind: values.kind.parse()?,
        })
    }
}

/// Browser number-input semantics: blank is zero, garbage is NaN.
pub fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.;
    }
    raw.parse().unwrap_or(f64::NAN)
}

fn parse_duration_part(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| ValidationError::InvalidDuration {
        field,
        value: raw.to_owned(),
    })
}

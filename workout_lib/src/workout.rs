use std::{borrow::Borrow, fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{derived::DerivedFields, error::ValidationError};

const ID_FRAGMENT_LEN: usize = 13;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Join key between a sidebar item and its map marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Two independent base-36 fragments glued together. Unique enough for one
    /// session, nothing more.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut id = String::with_capacity(ID_FRAGMENT_LEN * 2);
        for _ in 0..2 {
            id.push_str(&base36_fragment(rng));
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn base36_fragment<R: Rng>(rng: &mut R) -> String {
    (0..ID_FRAGMENT_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for WorkoutId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 2] = [WorkoutType::Running, WorkoutType::Cycling];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(WorkoutType::Running),
            "cycling" => Ok(WorkoutType::Cycling),
            _ => Err(ValidationError::UnknownType(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationParts {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationParts {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// One logged workout. Everything is fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: WorkoutId,
    coords: Coords,
    /// Kilometers
    distance: f64,
    duration: DurationParts,
    /// Steps per minute
    cadence: f64,
    kind: WorkoutType,
    derived: DerivedFields,
}

impl Workout {
    pub(crate) fn new(
        id: WorkoutId,
        coords: Coords,
        distance: f64,
        duration: DurationParts,
        cadence: f64,
        kind: WorkoutType,
        derived: DerivedFields,
    ) -> Self {
        Self {
            id,
            coords,
            distance,
            duration,
            cadence,
            kind,
            derived,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> DurationParts {
        self.duration
    }

    pub fn cadence(&self) -> f64 {
        self.cadence
    }

    pub fn kind(&self) -> WorkoutType {
        self.kind
    }

    pub fn derived(&self) -> &DerivedFields {
        &self.derived
    }

    pub fn title(&self) -> &str {
        &self.derived.title
    }

    pub fn date(&self) -> &str {
        &self.derived.date
    }

    pub fn duration_label(&self) -> &str {
        &self.derived.duration
    }

    /// Pace as shown to the user, `-` when it could not be computed.
    pub fn pace_label(&self) -> String {
        match &self.derived.pace {
            Some(pace) => pace.to_string(),
            None => "-".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn ids_are_two_base36_fragments() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = WorkoutId::generate(&mut rng);

        assert_eq!(id.as_str().len(), ID_FRAGMENT_LEN * 2);
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn ids_differ_between_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = WorkoutId::generate(&mut rng);
        let b = WorkoutId::generate(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn workout_type_parsing_ignores_case_and_whitespace() {
        assert_eq!(" Running ".parse::<WorkoutType>(), Ok(WorkoutType::Running));
        assert_eq!("CYCLING".parse::<WorkoutType>(), Ok(WorkoutType::Cycling));
        assert_eq!(
            "swimming".parse::<WorkoutType>(),
            Err(ValidationError::UnknownType("swimming".into()))
        );
    }

    #[test]
    fn duration_totals_and_display() {
        let duration = DurationParts::new(1, 2, 3);
        assert_eq!(duration.total_seconds(), 3723);
        assert_eq!(duration.to_string(), "1:02:03");
    }
}

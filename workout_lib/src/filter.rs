use std::{fmt, str::FromStr};

use crate::workout::{Workout, WorkoutType};

/// Which workouts the sidebar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkoutFilter {
    #[default]
    All,
    Only(WorkoutType),
}

impl WorkoutFilter {
    pub const OPTIONS: [WorkoutFilter; 3] = [
        WorkoutFilter::All,
        WorkoutFilter::Only(WorkoutType::Running),
        WorkoutFilter::Only(WorkoutType::Cycling),
    ];

    pub fn matches(&self, workout: &Workout) -> bool {
        match self {
            WorkoutFilter::All => true,
            WorkoutFilter::Only(kind) => workout.kind() == *kind,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutFilter::All => "all",
            WorkoutFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutFilter::All => "All",
            WorkoutFilter::Only(WorkoutType::Running) => "Running",
            WorkoutFilter::Only(WorkoutType::Cycling) => "Cycling",
        }
    }
}

impl fmt::Display for WorkoutFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(WorkoutFilter::All);
        }
        s.parse::<WorkoutType>()
            .map(WorkoutFilter::Only)
            .map_err(|_| format!("Unknown filter {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_names_round_trip_through_select_values() {
        for filter in WorkoutFilter::OPTIONS {
            assert_eq!(filter.as_str().parse::<WorkoutFilter>(), Ok(filter));
        }
        assert!("hiking".parse::<WorkoutFilter>().is_err());
    }
}

pub mod config;
pub mod controller;
pub mod derived;
pub mod error;
pub mod filter;
pub mod input;
pub mod render;
pub mod store;
pub mod workout;

pub use config::AppConfig;
pub use controller::{MarkerKey, PendingWorkout, ViewCommand, ViewController};
pub use derived::{compute_derived_fields, DateStyle, DerivationRules, DerivedFields, Pace, PaceMode};
pub use error::{ConfigError, SubmitError, ValidationError};
pub use filter::WorkoutFilter;
pub use input::{FormValues, RawWorkoutInput};
pub use store::WorkoutStore;
pub use workout::{Coords, DurationParts, Workout, WorkoutId, WorkoutType};

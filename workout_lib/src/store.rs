use std::collections::HashMap;

use chrono::NaiveDate;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    derived::{compute_derived_fields, DerivationRules},
    error::ValidationError,
    filter::WorkoutFilter,
    input::RawWorkoutInput,
    workout::{Workout, WorkoutId},
};

/// Append-only list of the workouts logged in this session, in creation order.
pub struct WorkoutStore {
    workouts: Vec<Workout>,
    index: HashMap<WorkoutId, usize>,
    rules: DerivationRules,
    rng: StdRng,
}

impl WorkoutStore {
    pub fn new(rules: DerivationRules) -> Self {
        Self::with_rng(rules, StdRng::from_os_rng())
    }

    /// Reproducible ids, for tests.
    pub fn with_seed(rules: DerivationRules, seed: u64) -> Self {
        Self::with_rng(rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rules: DerivationRules, rng: StdRng) -> Self {
        Self {
            workouts: Vec::new(),
            index: HashMap::new(),
            rules,
            rng,
        }
    }

    pub fn rules(&self) -> &DerivationRules {
        &self.rules
    }

    /// Validates the input, derives the display fields and appends the workout.
    /// The store is left untouched when validation fails.
    pub fn create(&mut self, input: RawWorkoutInput, today: NaiveDate) -> Result<&Workout, ValidationError> {
        validate_metrics(input.distance, input.cadence)?;

        let derived = compute_derived_fields(&input, today, &self.rules);
        let id = self.fresh_id();
        let workout = Workout::new(
            id.clone(),
            input.coords,
            input.distance,
            input.duration,
            input.cadence,
            input.kind,
            derived,
        );

        tracing::info!(id = %id, kind = %input.kind, distance = input.distance, "Workout created");

        let position = self.workouts.len();
        self.index.insert(id, position);
        self.workouts.push(workout);
        Ok(&self.workouts[position])
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.index.get(id).map(|&i| &self.workouts[i])
    }

    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn filtered(&self, filter: WorkoutFilter) -> impl DoubleEndedIterator<Item = &Workout> {
        self.workouts.iter().filter(move |workout| filter.matches(workout))
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    fn fresh_id(&mut self) -> WorkoutId {
        loop {
            let id = WorkoutId::generate(&mut self.rng);
            if !self.index.contains_key(&id) {
                return id;
            }
            tracing::warn!(id = %id, "Workout id clash, drawing again");
        }
    }
}

/// Both values must be numbers and at least one of them must be non-zero.
pub fn validate_metrics(distance: f64, cadence: f64) -> Result<(), ValidationError> {
    if !distance.is_finite() || !cadence.is_finite() {
        return Err(ValidationError::NotNumeric);
    }
    if distance == 0. && cadence == 0. {
        return Err(ValidationError::AllZero);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        derived::PaceMode,
        workout::{Coords, DurationParts, WorkoutType},
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn input(distance: f64, cadence: f64, kind: WorkoutType) -> RawWorkoutInput {
        RawWorkoutInput {
            coords: Coords::new(55.67, 12.56),
            distance,
            duration: DurationParts::new(0, 25, 0),
            cadence,
            kind,
        }
    }

    #[test]
    fn create_appends_with_derived_fields() {
        let mut store = WorkoutStore::with_seed(DerivationRules::default(), 1);

        let workout = store.create(input(5., 3., WorkoutType::Running), today()).unwrap().clone();

        assert_eq!(store.len(), 1);
        assert_eq!(workout.title(), "Running");
        assert_eq!(workout.date(), "1 October");
        assert_eq!(workout.duration_label(), "0:25:00");
        assert_eq!(workout.derived().pace.unwrap().minutes, 5);
        assert_eq!(store.find_by_id(workout.id().as_str()), Some(&workout));
    }

    #[test]
    fn one_non_zero_metric_is_enough() {
        let mut store = WorkoutStore::with_seed(DerivationRules::default(), 1);

        assert!(store.create(input(0., 170., WorkoutType::Running), today()).is_ok());
        assert!(store.create(input(12., 0., WorkoutType::Cycling), today()).is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn zero_distance_keeps_pace_undefined() {
        let mut store = WorkoutStore::with_seed(DerivationRules::default(), 1);
        let workout = store.create(input(0., 170., WorkoutType::Running), today()).unwrap();
        assert_eq!(workout.pace_label(), "-");
    }

    #[test]
    fn rejected_input_leaves_store_unchanged() {
        let mut store = WorkoutStore::with_seed(DerivationRules::default(), 1);

        assert_eq!(
            store.create(input(0., 0., WorkoutType::Running), today()).unwrap_err(),
            ValidationError::AllZero
        );
        assert_eq!(
            store.create(input(f64::NAN, 3., WorkoutType::Running), today()).unwrap_err(),
            ValidationError::NotNumeric
        );
        assert_eq!(
            store.create(input(5., f64::INFINITY, WorkoutType::Running), today()).unwrap_err(),
            ValidationError::NotNumeric
        );
        assert!(store.is_empty());
    }

    #[test]
    fn lookup_of_unknown_id_is_none() {
        let mut store = WorkoutStore::with_seed(DerivationRules::default(), 1);
        store.create(input(5., 3., WorkoutType::Running), today()).unwrap();
        assert!(store.find_by_id("not-an-id").is_none());
    }

    #[test]
    fn every_created_workout_can_be_found() {
        let mut store = WorkoutStore::with_seed(DerivationRules::default(), 42);
        let mut ids = Vec::new();
        for i in 1..=20 {
            let workout = store.create(input(i as f64, 0., WorkoutType::Cycling), today()).unwrap();
            ids.push(workout.id().clone());
        }

        for (position, id) in ids.iter().enumerate() {
            let found = store.find_by_id(id.as_str()).unwrap();
            assert_eq!(found, &store.all()[position]);
        }
    }

    #[test]
    fn filtering_keeps_insertion_order() {
        let mut store = WorkoutStore::with_seed(DerivationRules::default(), 3);
        store.create(input(1., 0., WorkoutType::Running), today()).unwrap();
        store.create(input(2., 0., WorkoutType::Cycling), today()).unwrap();
        store.create(input(3., 0., WorkoutType::Running), today()).unwrap();

        let running: Vec<f64> = store
            .filtered(WorkoutFilter::Only(WorkoutType::Running))
            .map(|w| w.distance())
            .collect();
        assert_eq!(running, vec![1., 3.]);
        assert_eq!(store.filtered(WorkoutFilter::All).count(), 3);
    }

    #[test]
    fn store_applies_its_pace_mode() {
        let rules = DerivationRules {
            pace: PaceMode::Seconds,
            ..Default::default()
        };
        let mut store = WorkoutStore::with_seed(rules, 1);
        let mut raw = input(5., 0., WorkoutType::Running);
        raw.duration = DurationParts::new(0, 27, 30);

        assert_eq!(store.create(raw, today()).unwrap().pace_label(), "5:30");
    }
}

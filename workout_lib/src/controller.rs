//! Turns the page's events into store updates and a list of view commands.
//!
//! The controller never touches the page itself. The frontend applies the
//! commands to the map, the form and the list, which keeps every rule in here
//! testable without a browser.

use chrono::NaiveDate;

use crate::{
    config::AppConfig,
    error::SubmitError,
    filter::WorkoutFilter,
    input::{FormValues, RawWorkoutInput},
    render,
    store::WorkoutStore,
    workout::{Coords, Workout, WorkoutId},
};

/// Handle the frontend uses to address a marker it placed on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerKey(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    RenderMap { center: Coords, zoom: f64 },
    PlaceMarker { marker: MarkerKey, at: Coords },
    RemoveMarker { marker: MarkerKey },
    ShowForm,
    FocusDistance,
    HideForm,
    ResetForm,
    AppendListItem { id: WorkoutId },
    RefreshList,
    BindPopup { marker: MarkerKey, html: String, class_name: String },
    Recenter { at: Coords, zoom: f64, pan_duration: f64 },
    Alert(String),
}

/// Location picked on the map, waiting for the form to be submitted.
/// Consumed by the first successful submission.
#[derive(Debug, PartialEq)]
pub struct PendingWorkout {
    coords: Coords,
    marker: MarkerKey,
}

impl PendingWorkout {
    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn marker(&self) -> MarkerKey {
        self.marker
    }
}

pub struct ViewController {
    store: WorkoutStore,
    config: AppConfig,
    pending: Option<PendingWorkout>,
    filter: WorkoutFilter,
    next_marker: u64,
}

impl ViewController {
    pub fn new(config: AppConfig) -> Self {
        let store = WorkoutStore::new(config.derivation);
        Self::with_store(config, store)
    }

    pub fn with_store(config: AppConfig, store: WorkoutStore) -> Self {
        Self {
            store,
            config,
            pending: None,
            filter: WorkoutFilter::default(),
            next_marker: 0,
        }
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn pending(&self) -> Option<&PendingWorkout> {
        self.pending.as_ref()
    }

    pub fn filter(&self) -> WorkoutFilter {
        self.filter
    }

    /// Workouts for the sidebar, newest first.
    pub fn visible_workouts(&self) -> Vec<&Workout> {
        self.store.filtered(self.filter).rev().collect()
    }

    pub fn position_acquired(&mut self, center: Coords) -> Vec<ViewCommand> {
        tracing::info!(lat = center.lat, lng = center.lng, "Position acquired");
        vec![ViewCommand::RenderMap {
            center,
            zoom: self.config.map.zoom,
        }]
    }

    pub fn position_failed(&mut self, message: &str) -> Vec<ViewCommand> {
        tracing::warn!(reason = message, "Position unavailable, map disabled");
        vec![ViewCommand::Alert(message.to_owned())]
    }

    pub fn map_clicked(&mut self, at: Coords) -> Vec<ViewCommand> {
        let mut commands = Vec::with_capacity(4);

        // Only one location can be pending. A second click moves it.
        if let Some(previous) = self.pending.take() {
            tracing::debug!(marker = ?previous.marker, "Replacing pending location");
            commands.push(ViewCommand::RemoveMarker {
                marker: previous.marker,
            });
        }

        let marker = MarkerKey(self.next_marker);
        self.next_marker += 1;
        self.pending = Some(PendingWorkout { coords: at, marker });

        tracing::debug!(lat = at.lat, lng = at.lng, ?marker, "Map clicked");

        commands.extend([
            ViewCommand::PlaceMarker { marker, at },
            ViewCommand::ShowForm,
            ViewCommand::FocusDistance,
        ]);
        commands
    }

    /// Creates a workout at the pending location. On error the pending
    /// location is kept so the user can fix the form and submit again.
    pub fn form_submitted(&mut self, values: &FormValues, today: NaiveDate) -> Result<Vec<ViewCommand>, SubmitError> {
        let pending = self.pending.take().ok_or(SubmitError::NoPendingLocation)?;

        match self.create_at(&pending, values, today) {
            Ok(commands) => Ok(commands),
            Err(err) => {
                tracing::warn!(error = %err, "Workout rejected");
                self.pending = Some(pending);
                Err(err)
            }
        }
    }

    fn create_at(
        &mut self,
        pending: &PendingWorkout,
        values: &FormValues,
        today: NaiveDate,
    ) -> Result<Vec<ViewCommand>, SubmitError> {
        let input = RawWorkoutInput::from_form(pending.coords, values)?;
        let workout = self.store.create(input, today)?;

        Ok(vec![
            ViewCommand::HideForm,
            ViewCommand::ResetForm,
            ViewCommand::AppendListItem {
                id: workout.id().clone(),
            },
            ViewCommand::BindPopup {
                marker: pending.marker,
                html: render::popup_html(workout),
                class_name: render::popup_class(workout.kind()),
            },
        ])
    }

    /// Unknown ids are ignored.
    pub fn list_item_clicked(&mut self, dom_id: &str) -> Vec<ViewCommand> {
        let Some(workout) = self.store.find_by_id(dom_id) else {
            tracing::debug!(dom_id, "Clicked item has no workout");
            return Vec::new();
        };

        vec![ViewCommand::Recenter {
            at: workout.coords(),
            zoom: self.config.map.zoom,
            pan_duration: self.config.map.pan_duration_secs,
        }]
    }

    pub fn filter_changed(&mut self, filter: WorkoutFilter) -> Vec<ViewCommand> {
        if filter == self.filter {
            return Vec::new();
        }
        tracing::debug!(%filter, "Filter changed");
        self.filter = filter;
        vec![ViewCommand::RefreshList]
    }
}

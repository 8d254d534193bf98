use crate::workout::{Workout, WorkoutType};

/// Popup body bound to a workout's marker.
pub fn popup_html(workout: &Workout) -> String {
    format!(
        "<span>Distance:</span><span>{} km</span>\
         <span>Duration:</span><span>{}</span>\
         <span>Avg. Pace:</span><span>{} min/km</span>",
        workout.distance(),
        workout.duration_label(),
        workout.pace_label(),
    )
}

pub fn popup_class(kind: WorkoutType) -> String {
    format!("{kind}--popup")
}

pub fn list_item_class(kind: WorkoutType) -> String {
    format!("workout workout--{kind}")
}

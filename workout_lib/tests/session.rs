use chrono::NaiveDate;
use workout_lib::{
    AppConfig, Coords, DerivationRules, FormValues, PaceMode, SubmitError, ValidationError, ViewCommand,
    ViewController, WorkoutFilter, WorkoutStore, WorkoutType,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn controller_with(rules: DerivationRules) -> ViewController {
    let config = AppConfig {
        derivation: rules,
        ..Default::default()
    };
    ViewController::with_store(config, WorkoutStore::with_seed(rules, 2026))
}

fn controller() -> ViewController {
    controller_with(DerivationRules::default())
}

fn form(kind: &str, distance: &str, minutes: &str, cadence: &str) -> FormValues {
    FormValues {
        kind: kind.into(),
        distance: distance.into(),
        hours: "0".into(),
        minutes: minutes.into(),
        seconds: "0".into(),
        cadence: cadence.into(),
    }
}

#[test]
fn position_renders_the_map_at_configured_zoom() {
    let mut controller = controller();
    let commands = controller.position_acquired(Coords::new(56.175188, 10.196123));

    assert_eq!(
        commands,
        vec![ViewCommand::RenderMap {
            center: Coords::new(56.175188, 10.196123),
            zoom: 15.
        }]
    );
}

#[test]
fn denied_position_is_reported_to_the_user() {
    let mut controller = controller();
    let commands = controller.position_failed("User denied Geolocation");
    assert_eq!(commands, vec![ViewCommand::Alert("User denied Geolocation".into())]);
}

#[test]
fn click_then_submit_creates_a_running_workout() {
    let mut controller = controller();
    controller.position_acquired(Coords::new(55., 12.));

    let click = controller.map_clicked(Coords::new(55.1, 12.1));
    assert!(click.contains(&ViewCommand::ShowForm));
    assert!(click.contains(&ViewCommand::FocusDistance));

    let commands = controller
        .form_submitted(&form("running", "5", "25", "3"), today())
        .unwrap();

    let store = controller.store();
    assert_eq!(store.all().len(), 1);
    let workout = &store.all()[0];
    assert_eq!(workout.title(), "Running");
    assert_eq!(workout.kind(), WorkoutType::Running);
    assert_eq!(workout.coords(), Coords::new(55.1, 12.1));
    assert_eq!(workout.derived().pace.unwrap().minutes, 5);
    assert_eq!(workout.pace_label(), "5:0");

    assert_eq!(commands[0], ViewCommand::HideForm);
    assert_eq!(commands[1], ViewCommand::ResetForm);
    assert_eq!(commands[2], ViewCommand::AppendListItem { id: workout.id().clone() });
    match &commands[3] {
        ViewCommand::BindPopup { html, class_name, .. } => {
            assert!(html.contains("5 km"));
            assert!(html.contains("5:0 min/km"));
            assert_eq!(class_name, "running--popup");
        }
        other => panic!("expected a popup, got {other:?}"),
    }

    assert!(controller.pending().is_none());
}

#[test]
fn all_zero_input_is_rejected_and_keeps_the_form_open() {
    let mut controller = controller();
    controller.map_clicked(Coords::new(1., 2.));

    let err = controller
        .form_submitted(&form("running", "0", "25", "0"), today())
        .unwrap_err();

    assert_eq!(err, SubmitError::Validation(ValidationError::AllZero));
    assert!(err.to_string().starts_with("All fields are required."));
    assert!(controller.store().all().is_empty());
    assert_eq!(controller.pending().map(|p| p.coords()), Some(Coords::new(1., 2.)));

    // Corrected input goes through at the same location
    controller
        .form_submitted(&form("running", "4", "25", "0"), today())
        .unwrap();
    assert_eq!(controller.store().all()[0].coords(), Coords::new(1., 2.));
}

#[test]
fn non_numeric_input_is_rejected() {
    let mut controller = controller();
    controller.map_clicked(Coords::new(1., 2.));

    let err = controller
        .form_submitted(&form("cycling", "twelve", "40", "80"), today())
        .unwrap_err();

    assert_eq!(err, SubmitError::Validation(ValidationError::NotNumeric));
    assert_eq!(controller.store().len(), 0);
}

#[test]
fn submit_without_a_map_click_is_an_error() {
    let mut controller = controller();
    let err = controller
        .form_submitted(&form("running", "5", "25", "3"), today())
        .unwrap_err();
    assert_eq!(err, SubmitError::NoPendingLocation);
    assert!(controller.store().is_empty());
}

#[test]
fn pending_location_is_consumed_exactly_once() {
    let mut controller = controller();
    controller.map_clicked(Coords::new(1., 2.));
    controller
        .form_submitted(&form("running", "5", "25", "3"), today())
        .unwrap();

    let err = controller
        .form_submitted(&form("running", "5", "25", "3"), today())
        .unwrap_err();
    assert_eq!(err, SubmitError::NoPendingLocation);
    assert_eq!(controller.store().len(), 1);
}

#[test]
fn list_click_recenters_on_the_workout() {
    let mut controller = controller();
    controller.map_clicked(Coords::new(48.85, 2.35));
    controller
        .form_submitted(&form("cycling", "20", "50", "90"), today())
        .unwrap();
    let id = controller.store().all()[0].id().to_string();

    let commands = controller.list_item_clicked(&id);

    assert_eq!(
        commands,
        vec![ViewCommand::Recenter {
            at: Coords::new(48.85, 2.35),
            zoom: 15.,
            pan_duration: 1.5
        }]
    );
}

#[test]
fn list_click_with_unknown_id_does_nothing() {
    let mut controller = controller();
    assert!(controller.list_item_clicked("missing").is_empty());
}

#[test]
fn sidebar_shows_newest_first_within_the_filter() {
    let mut controller = controller();
    for (kind, distance) in [("running", "1"), ("cycling", "2"), ("running", "3")] {
        controller.map_clicked(Coords::new(0., 0.));
        controller
            .form_submitted(&form(kind, distance, "30", "0"), today())
            .unwrap();
    }

    let all: Vec<f64> = controller.visible_workouts().iter().map(|w| w.distance()).collect();
    assert_eq!(all, vec![3., 2., 1.]);

    controller.filter_changed(WorkoutFilter::Only(WorkoutType::Running));
    let running: Vec<f64> = controller.visible_workouts().iter().map(|w| w.distance()).collect();
    assert_eq!(running, vec![3., 1.]);
}

#[test]
fn pace_modes_disagree_on_the_sub_unit() {
    let mut legacy = controller();
    let mut seconds = controller_with(DerivationRules {
        pace: PaceMode::Seconds,
        ..Default::default()
    });

    for controller in [&mut legacy, &mut seconds] {
        controller.map_clicked(Coords::new(0., 0.));
        controller
            .form_submitted(&form("running", "5", "27", "0"), today())
            .unwrap();
    }

    // 27 min over 5 km is 5.4 min/km
    assert_eq!(legacy.store().all()[0].pace_label(), "5:40");
    assert_eq!(seconds.store().all()[0].pace_label(), "5:24");
}

use web_sys::{Element, HtmlSelectElement};
use workout_lib::{Workout, WorkoutFilter, WorkoutType, render};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutItemProps {
    pub workout: Workout,
}

#[function_component]
pub fn WorkoutItem(props: &WorkoutItemProps) -> Html {
    let workout = &props.workout;

    let icon = match workout.kind() {
        WorkoutType::Running => "fa-solid fa-person-running workout__icon",
        WorkoutType::Cycling => "fa-solid fa-bicycle workout__icon",
    };

    html! {
        <li class={render::list_item_class(workout.kind())} data-id={workout.id().to_string()}>
            <div class="workout__heading">
                <i class={icon}></i>
                <h2 class="workout__title">{workout.title()}</h2>
                <p class="workout__date">{workout.date()}</p>
            </div>
            <div class="workout__details">
                <Detail label="Distance" value={workout.distance().to_string()} unit="km" />
                <Detail label="Duration" value={workout.duration_label().to_string()} unit="h:m:s" />
                <Detail label="Avg Pace" value={workout.pace_label()} unit="min/km" />
                <Detail label="Cadence" value={workout.cadence().to_string()} unit="spm" />
            </div>
        </li>
    }
}

#[derive(PartialEq, Properties, Clone)]
struct DetailProps {
    label: AttrValue,
    value: AttrValue,
    unit: AttrValue,
}

#[function_component]
fn Detail(props: &DetailProps) -> Html {
    html! {
        <div>
            <span class="workout__label">{props.label.clone()}</span>
            <span>
                <span class="workout__value">{props.value.clone()}</span>
                <span class="workout__unit">{props.unit.clone()}</span>
            </span>
        </div>
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutListProps {
    pub workouts: Vec<Workout>,
    /// Receives the `data-id` of the clicked item
    pub on_select: Callback<String>,
    pub children: Html,
}

/// Sidebar list. Clicks are resolved through the item's `data-id`, the same
/// way the map marker is joined to its workout.
#[function_component]
pub fn WorkoutList(props: &WorkoutListProps) -> Html {
    let on_select = props.on_select.clone();

    let onclick = Callback::from(move |e: MouseEvent| {
        let target: Element = e.target_unchecked_into();
        let Ok(Some(item)) = target.closest(".workout") else {
            return;
        };
        if let Some(id) = item.get_attribute("data-id") {
            on_select.emit(id);
        }
    });

    html! {
        <ul class="workouts" {onclick}>
            { props.children.clone() }
            { for props.workouts.iter().map(|workout| html! {
                <WorkoutItem key={workout.id().to_string()} workout={workout.clone()} />
            }) }
        </ul>
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct FilterSelectProps {
    pub current: WorkoutFilter,
    pub on_change: Callback<WorkoutFilter>,
}

#[function_component]
pub fn FilterSelect(props: &FilterSelectProps) -> Html {
    let on_change = props.on_change.clone();

    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        match select.value().parse::<WorkoutFilter>() {
            Ok(filter) => on_change.emit(filter),
            Err(err) => gloo_console::error!(err),
        }
    });

    html! {
        <div class="filter">
            <label class="filter__label">{"Show"}</label>
            <select class="filter__input" {onchange}>
                { for WorkoutFilter::OPTIONS.iter().map(|filter| html! {
                    <option value={filter.as_str()} selected={*filter == props.current}>{filter.label()}</option>
                }) }
            </select>
        </div>
    }
}

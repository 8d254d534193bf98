use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_lib::{FormValues, WorkoutType};
use yew::prelude::*;

/// Handles to the form controls, owned by the app so it can reset and focus them.
#[derive(Clone, Default, PartialEq)]
pub struct FormRefs {
    pub form: NodeRef,
    pub kind: NodeRef,
    pub distance: NodeRef,
    pub hours: NodeRef,
    pub minutes: NodeRef,
    pub seconds: NodeRef,
    pub cadence: NodeRef,
}

impl FormRefs {
    pub fn values(&self) -> FormValues {
        FormValues {
            kind: self
                .kind
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default(),
            distance: input_value(&self.distance),
            hours: input_value(&self.hours),
            minutes: input_value(&self.minutes),
            seconds: input_value(&self.seconds),
            cadence: input_value(&self.cadence),
        }
    }

    /// Clears the numeric inputs, keeping the type and duration.
    pub fn reset(&self) {
        let values = self.values().cleared_after_submit();
        set_input_value(&self.distance, &values.distance);
        set_input_value(&self.cadence, &values.cadence);
    }

    pub fn focus_distance(&self) {
        if let Some(input) = self.distance.cast::<HtmlInputElement>() {
            if let Err(err) = input.focus() {
                gloo_console::error!(format!("Could not focus distance input: {err:?}"));
            }
        }
    }
}

fn set_input_value(node: &NodeRef, value: &str) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.set_value(value);
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub visible: bool,
    pub refs: FormRefs,
    pub on_submit: Callback<FormValues>,
}

#[function_component]
pub fn WorkoutForm(props: &WorkoutFormProps) -> Html {
    let refs = props.refs.clone();
    let on_submit = props.on_submit.clone();

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(refs.values());
    });

    let refs = &props.refs;

    html! {
        <form ref={refs.form.clone()} class={classes!("form", (!props.visible).then_some("hidden"))} {onsubmit}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select ref={refs.kind.clone()} class="form__input form__input--type">
                    { for WorkoutType::ALL.iter().map(|kind| html! {
                        <option value={kind.as_str()}>{workout_lib::derived::capitalize(kind.as_str())}</option>
                    }) }
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input ref={refs.distance.clone()} class="form__input form__input--distance" placeholder="km" />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input ref={refs.hours.clone()} class="form__input form__input--duration" placeholder="hh" />
                <input ref={refs.minutes.clone()} class="form__input form__input--duration" placeholder="mm" />
                <input ref={refs.seconds.clone()} class="form__input form__input--duration" placeholder="ss" />
            </div>
            <div class="form__row">
                <label class="form__label">{"Cadence"}</label>
                <input ref={refs.cadence.clone()} class="form__input form__input--cadence" placeholder="step/min" />
            </div>
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}

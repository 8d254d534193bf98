use chrono::Local;
use components::{
    workout_form::{FormRefs, WorkoutForm},
    workout_list::{FilterSelect, WorkoutList},
};
use gloo_console::{error, info};
use gloo_history::HistoryListener;
use gloo_utils::window;
use map_view::MapView;
use wasm_bindgen_futures::spawn_local;
use workout_lib::{AppConfig, Coords, FormValues, ViewCommand, ViewController, Workout, WorkoutFilter, WorkoutType};
use yew::prelude::*;
use yew_router::{
    history::{BrowserHistory, History},
    Routable,
};

mod components;
mod geolocation;
mod log;
mod map_view;

#[derive(Clone, Debug, PartialEq, Routable)]
enum Route {
    #[at("/")]
    All,
    #[at("/running")]
    Running,
    #[at("/cycling")]
    Cycling,
    #[not_found]
    #[at("/404")]
    Invalid,
}

impl Route {
    fn filter(&self) -> WorkoutFilter {
        match self {
            Route::Running => WorkoutFilter::Only(WorkoutType::Running),
            Route::Cycling => WorkoutFilter::Only(WorkoutType::Cycling),
            Route::All | Route::Invalid => WorkoutFilter::All,
        }
    }

    fn from_filter(filter: WorkoutFilter) -> Self {
        match filter {
            WorkoutFilter::All => Route::All,
            WorkoutFilter::Only(WorkoutType::Running) => Route::Running,
            WorkoutFilter::Only(WorkoutType::Cycling) => Route::Cycling,
        }
    }

    fn current() -> Self {
        Route::recognize(BrowserHistory::new().location().path()).unwrap_or(Route::Invalid)
    }
}

fn load_config() -> AppConfig {
    match AppConfig::from_json_str(include_str!("../config.json")) {
        Ok(config) => config,
        Err(err) => {
            error!(format!("{err}, using defaults"));
            AppConfig::default()
        }
    }
}

enum AppMsg {
    PositionAcquired(Coords),
    PositionFailed(String),
    MapClicked(Coords),
    FormSubmitted(FormValues),
    ListItemClicked(String),
    FilterChanged(WorkoutFilter),
    /// Back/forward navigation, the URL already holds the filter.
    RouteChanged(WorkoutFilter),
}

struct App {
    controller: ViewController,
    map_view: MapView,
    form_refs: FormRefs,
    form_visible: bool,
    focus_distance: bool,
    _history_listener: HistoryListener,
}

impl App {
    /// Applies the controller's commands. Returns whether the view needs to re-render.
    fn apply(&mut self, ctx: &Context<Self>, commands: Vec<ViewCommand>) -> bool {
        let mut changed = false;

        for command in commands {
            match command {
                ViewCommand::RenderMap { center, zoom } => {
                    let on_click = ctx.link().callback(AppMsg::MapClicked);
                    self.map_view.render_at(center, zoom, on_click);
                }
                ViewCommand::PlaceMarker { marker, at } => self.map_view.place_marker(marker, at),
                ViewCommand::RemoveMarker { marker } => self.map_view.remove_marker(marker),
                ViewCommand::ShowForm => {
                    self.form_visible = true;
                    changed = true;
                }
                ViewCommand::FocusDistance => {
                    self.focus_distance = true;
                    changed = true;
                }
                ViewCommand::HideForm => {
                    self.form_visible = false;
                    changed = true;
                }
                ViewCommand::ResetForm => self.form_refs.reset(),
                ViewCommand::AppendListItem { id } => {
                    info!(format!("Listing workout {id}"));
                    changed = true;
                }
                ViewCommand::RefreshList => changed = true,
                ViewCommand::BindPopup {
                    marker,
                    html,
                    class_name,
                } => self.map_view.bind_popup(marker, &html, &class_name),
                ViewCommand::Recenter { at, zoom, pan_duration } => self.map_view.recenter(at, zoom, pan_duration),
                ViewCommand::Alert(message) => alert(&message),
            }
        }

        changed
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = load_config();
        let map_view = MapView::new(&config);
        let mut controller = ViewController::new(config);

        controller.filter_changed(Route::current().filter());

        let link = ctx.link().clone();
        let history_listener = BrowserHistory::new().listen(move || {
            link.send_message(AppMsg::RouteChanged(Route::current().filter()));
        });

        let link = ctx.link().clone();
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(coords) => link.send_message(AppMsg::PositionAcquired(coords)),
                Err(message) => link.send_message(AppMsg::PositionFailed(message)),
            }
        });

        Self {
            controller,
            map_view,
            form_refs: FormRefs::default(),
            form_visible: false,
            focus_distance: false,
            _history_listener: history_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let commands = match msg {
            AppMsg::PositionAcquired(coords) => self.controller.position_acquired(coords),
            AppMsg::PositionFailed(message) => self.controller.position_failed(&message),
            AppMsg::MapClicked(coords) => self.controller.map_clicked(coords),
            AppMsg::FormSubmitted(values) => {
                let today = Local::now().date_naive();
                match self.controller.form_submitted(&values, today) {
                    Ok(commands) => commands,
                    Err(err) => {
                        alert(&err.to_string());
                        return false;
                    }
                }
            }
            AppMsg::ListItemClicked(id) => self.controller.list_item_clicked(&id),
            AppMsg::FilterChanged(filter) => {
                BrowserHistory::new().push(Route::from_filter(filter).to_path());
                self.controller.filter_changed(filter)
            }
            AppMsg::RouteChanged(filter) => self.controller.filter_changed(filter),
        };

        self.apply(ctx, commands)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.map_view.invalidate_size();
        if self.focus_distance {
            self.form_refs.focus_distance();
            self.focus_distance = false;
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let workouts: Vec<Workout> = self.controller.visible_workouts().into_iter().cloned().collect();

        html! {
            <>
                <div class="sidebar">
                    <FilterSelect current={self.controller.filter()} on_change={link.callback(AppMsg::FilterChanged)} />
                    <WorkoutList workouts={workouts} on_select={link.callback(AppMsg::ListItemClicked)}>
                        <WorkoutForm
                            visible={self.form_visible}
                            refs={self.form_refs.clone()}
                            on_submit={link.callback(AppMsg::FormSubmitted)}
                        />
                    </WorkoutList>
                    <p class="copyright">{"Click on the map to log a workout"}</p>
                </div>
                { self.map_view.render() }
            </>
        }
    }
}

fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        error!(format!("Could not show alert: {message}"));
    }
}

fn main() {
    log::init();
    yew::Renderer::<App>::new().render();
}

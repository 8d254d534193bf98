use std::collections::HashMap;

use gloo_utils::document;
use js_sys::{Object, Reflect};
use leaflet::{
    Icon, IconOptions, LatLng, Map, MapOptions, Marker, MarkerOptions, Point, Popup, PopupOptions, TileLayer,
    TileLayerOptions,
};
use wasm_bindgen::{prelude::*, JsCast, JsValue};
use web_sys::{Element, HtmlElement, Node};
use workout_lib::{
    config::{MapConfig, MarkerIconConfig, PopupConfig},
    AppConfig, Coords, MarkerKey,
};
use yew::{Callback, Html};

// Leaflet calls that need arguments the bindings don't expose
#[wasm_bindgen]
extern "C" {
    type LeafletEvented;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletEvented, kind: &str, handler: &JsValue);

    type LeafletView;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view_with_options(this: &LeafletView, center: &LatLng, zoom: f64, options: &JsValue);

    type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &LeafletMouseEvent) -> LatLng;

    type LeafletLayer;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &LeafletLayer);
}

/// The Leaflet map and the markers placed on it.
pub struct MapView {
    map: Map,
    container: HtmlElement,
    markers: HashMap<MarkerKey, Marker>,
    map_config: MapConfig,
    icon_config: MarkerIconConfig,
    popup_config: PopupConfig,
    click_handler: Option<Closure<dyn FnMut(JsValue)>>,
    rendered: bool,
}

impl MapView {
    pub fn new(config: &AppConfig) -> Self {
        let container: Element = document().create_element("div").unwrap();
        let container: HtmlElement = container.dyn_into().unwrap();
        container.set_id("map");

        let map = Map::new_with_element(&container, &MapOptions::default());

        Self {
            map,
            container,
            markers: HashMap::new(),
            map_config: config.map.clone(),
            icon_config: config.marker.clone(),
            popup_config: config.popup.clone(),
            click_handler: None,
            rendered: false,
        }
    }

    pub fn render(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }

    /// Centers the map, loads the tiles and starts reporting clicks.
    pub fn render_at(&mut self, center: Coords, zoom: f64, on_click: Callback<Coords>) {
        self.map.set_max_zoom(self.map_config.max_zoom);
        self.map.set_view(&lat_lng(center), zoom);

        if !self.rendered {
            add_tile_layer(&self.map, &self.map_config);

            let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let latlng = event.unchecked_into::<LeafletMouseEvent>().latlng();
                on_click.emit(Coords::new(latlng.lat(), latlng.lng()));
            });
            self.map
                .unchecked_ref::<LeafletEvented>()
                .on("click", handler.as_ref());
            self.click_handler = Some(handler);
            self.rendered = true;
        }

        self.map.invalidate_size(false);
    }

    pub fn place_marker(&mut self, key: MarkerKey, at: Coords) {
        let opts = MarkerOptions::new();
        opts.set_icon(make_icon(&self.icon_config));

        let marker = Marker::new_with_options(&lat_lng(at), &opts);
        marker.add_to(&self.map);
        self.markers.insert(key, marker);
    }

    pub fn remove_marker(&mut self, key: MarkerKey) {
        if let Some(marker) = self.markers.remove(&key) {
            marker.remove();
        }
    }

    /// Attaches a popup that stays open until the user closes it.
    pub fn bind_popup(&self, key: MarkerKey, html: &str, class_name: &str) {
        let Some(marker) = self.markers.get(&key) else {
            gloo_console::error!(format!("No marker {:?} to bind a popup to", key));
            return;
        };

        let opts = PopupOptions::default();
        opts.set_max_width(self.popup_config.max_width);
        opts.set_max_height(self.popup_config.max_height);
        opts.set_close_button(false);
        opts.set_auto_close(false);
        opts.set_close_on_click(false);
        opts.set_class_name(class_name.into());

        let popup = Popup::new(&opts, None);
        popup.set_content(&html.into());

        marker.bind_popup(&popup);
        marker.unchecked_ref::<LeafletLayer>().open_popup();
    }

    pub fn recenter(&self, at: Coords, zoom: f64, pan_duration: f64) {
        let pan = Object::new();
        let _ = Reflect::set(&pan, &"duration".into(), &pan_duration.into());
        let opts = Object::new();
        let _ = Reflect::set(&opts, &"animate".into(), &JsValue::TRUE);
        let _ = Reflect::set(&opts, &"pan".into(), &pan);

        self.map
            .unchecked_ref::<LeafletView>()
            .set_view_with_options(&lat_lng(at), zoom, &opts);
    }

    pub fn invalidate_size(&self) {
        if self.rendered {
            self.map.invalidate_size(false);
        }
    }
}

fn lat_lng(coords: Coords) -> LatLng {
    LatLng::new(coords.lat, coords.lng)
}

fn make_icon(config: &MarkerIconConfig) -> Icon {
    let opts = IconOptions::new();
    opts.set_icon_url(config.icon_url.clone());
    opts.set_icon_size(point(config.icon_size));
    opts.set_icon_anchor(point(config.icon_anchor));
    opts.set_popup_anchor(point(config.popup_anchor));
    opts.set_shadow_url(config.shadow_url.clone());
    opts.set_shadow_size(point(config.shadow_size));
    Icon::new(&opts)
}

fn point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}

fn add_tile_layer(map: &Map, config: &MapConfig) {
    let opts = TileLayerOptions::new();
    opts.set_attribution(config.attribution.clone());
    opts.set_update_when_idle(true);
    TileLayer::new_options(&config.tile_url, &opts).add_to(map);
}

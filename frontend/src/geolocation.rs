use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use gloo_utils::window;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Position as GeolocationPosition, PositionError as GeolocationPositionError};
use workout_lib::Coords;

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coords, String>>>>>;

/// Asks the browser for the current position once.
/// Never resolves if the browser never answers.
pub async fn current_position() -> Result<Coords, String> {
    let geolocation = window()
        .navigator()
        .geolocation()
        .map_err(|_| "Geolocation is not supported by this browser".to_string())?;

    let (tx, rx) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let reply = reply.clone();
        Closure::<dyn FnMut(GeolocationPosition)>::new(move |position: GeolocationPosition| {
            let coords = position.coords();
            send(&reply, Ok(Coords::new(coords.latitude(), coords.longitude())));
        })
    };

    let on_error = {
        let reply = reply.clone();
        Closure::<dyn FnMut(GeolocationPositionError)>::new(move |error: GeolocationPositionError| {
            send(&reply, Err(error.message()));
        })
    };

    geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .map_err(|err| format!("Could not request position: {err:?}"))?;

    // Both closures have to outlive the request
    let result = rx.await.map_err(|_| "Position request was dropped".to_string())?;
    drop((on_success, on_error));
    result
}

fn send(reply: &Reply, result: Result<Coords, String>) {
    if let Some(tx) = reply.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

// Guess submission: POST the marker coordinates to the game page endpoint.
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::XmlHttpRequest;
use yew::Callback;

use crate::error::{ClientError, Result};
use crate::model::LatLng;
use crate::util::clog;

pub const SUBMIT_PATH: &str = "/gamepage";
/// The server answers with exactly this body when it accepted the guess.
pub const SUCCESS_BODY: &str = "ok";

const READY_STATE_DONE: u16 = 4;

#[derive(Serialize)]
struct CoordinateSubmission<'a> {
    latitude: f64,
    longitude: f64,
    csrf_token: &'a str,
}

pub fn encode_submission(pos: LatLng, csrf_token: &str) -> Result<String> {
    if csrf_token.is_empty() {
        return Err(ClientError::MissingCsrfToken);
    }
    serde_json::to_string(&CoordinateSubmission {
        latitude: pos.lat,
        longitude: pos.lng,
        csrf_token,
    })
    .map_err(ClientError::Encode)
}

/// Only the literal `ok` body counts as success.
pub fn classify_response(status: u16, body: &str) -> Result<()> {
    if body == SUCCESS_BODY {
        return Ok(());
    }
    match status {
        0 => Err(ClientError::Network),
        200..=299 => Err(ClientError::Rejected(body.to_string())),
        _ => Err(ClientError::Http(status)),
    }
}

/// Fire the request; `on_done` receives the classified outcome once the
/// request completes.
pub fn submit_coordinates(
    pos: LatLng,
    csrf_token: &str,
    on_done: Callback<Result<()>>,
) -> Result<()> {
    let body = encode_submission(pos, csrf_token)?;
    let xhr = XmlHttpRequest::new()?;
    xhr.open_with_async("POST", SUBMIT_PATH, true)?;
    xhr.set_request_header("Content-Type", "application/json")?;

    let xhr_cb = xhr.clone();
    let onchange = Closure::wrap(Box::new(move || {
        if xhr_cb.ready_state() != READY_STATE_DONE {
            return;
        }
        let status = xhr_cb.status().unwrap_or(0);
        let text = xhr_cb.response_text().ok().flatten().unwrap_or_default();
        clog(&format!("submit: status={} body_len={}", status, text.len()));
        on_done.emit(classify_response(status, &text));
    }) as Box<dyn FnMut()>);
    xhr.set_onreadystatechange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();

    clog(&format!("submit: lat={} lng={}", pos.lat, pos.lng));
    xhr.send_with_opt_str(Some(&body))?;
    Ok(())
}

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::error::{ClientError, Result};
use crate::model::LatLng;

pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(ClientError::NoWindow)?
        .document()
        .ok_or(ClientError::NoDocument)
}

/// Value of the `<input id=...>` the server rendered into the page.
pub fn input_value(id: &str) -> Result<String> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .ok_or_else(|| ClientError::MissingElement(id.to_string()))
}

pub fn csrf_token() -> Result<String> {
    match input_value("csrf_token") {
        Ok(token) if !token.is_empty() => Ok(token),
        Ok(_) | Err(ClientError::MissingElement(_)) => Err(ClientError::MissingCsrfToken),
        Err(e) => Err(e),
    }
}

fn coordinate(id: &str) -> Result<f64> {
    input_value(id)?
        .trim()
        .parse::<f64>()
        .map_err(|_| ClientError::InvalidCoordinate(id.to_string()))
}

/// Target location from the hidden `lat` / `lng` inputs of the result page.
pub fn target_from_inputs() -> Result<LatLng> {
    Ok(LatLng { lat: coordinate("lat")?, lng: coordinate("lng")? })
}

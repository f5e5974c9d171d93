use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("failed to encode request: {0}")]
    Encode(serde_json::Error),
    #[error("invalid page config: {0}")]
    Config(serde_json::Error),
    #[error("Please place a marker on the map before submitting.")]
    NoMarker,
    #[error("invalid coordinate in #{0}")]
    InvalidCoordinate(String),
    #[error("missing csrf token")]
    MissingCsrfToken,
    #[error("server rejected submission: {0:?}")]
    Rejected(String),
    #[error("request failed with status {0}")]
    Http(u16),
    #[error("network error")]
    Network,
    #[error("google maps api not loaded")]
    MapApiUnavailable,
    #[error("countdown needs at least one minute")]
    InvalidCountdown,
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        ClientError::Js(msg)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

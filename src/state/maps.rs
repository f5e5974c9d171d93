//! Thin controller over the Google Maps JS API.
//!
//! The API is loaded by a `<script>` tag on the page, so it is reached through
//! `js_sys::Reflect` on the global object instead of static bindings. A
//! `MapWidget` owns its map, its single marker and its click listener, and
//! releases them on drop.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::error::{ClientError, Result};
use crate::model::LatLng;
use crate::util::clog;

fn get(target: &JsValue, key: &str) -> Result<JsValue> {
    let v = Reflect::get(target, &JsValue::from_str(key))?;
    if v.is_undefined() || v.is_null() {
        return Err(ClientError::MapApiUnavailable);
    }
    Ok(v)
}

fn maps_namespace() -> Result<JsValue> {
    let google = get(&js_sys::global(), "google")?;
    get(&google, "maps")
}

fn call(target: &JsValue, method: &str, args: &Array) -> Result<JsValue> {
    let f: Function = get(target, method)?.dyn_into().map_err(|_| ClientError::MapApiUnavailable)?;
    Ok(f.apply(target, args)?)
}

fn construct(class: &str, args: &Array) -> Result<JsValue> {
    let ctor: Function = get(&maps_namespace()?, class)?
        .dyn_into()
        .map_err(|_| ClientError::MapApiUnavailable)?;
    Ok(Reflect::construct(&ctor, args)?)
}

fn set(obj: &Object, key: &str, value: &JsValue) -> Result<()> {
    Reflect::set(obj, &JsValue::from_str(key), value)?;
    Ok(())
}

fn lat_lng_literal(pos: LatLng) -> Result<JsValue> {
    let obj = Object::new();
    set(&obj, "lat", &JsValue::from_f64(pos.lat))?;
    set(&obj, "lng", &JsValue::from_f64(pos.lng))?;
    Ok(obj.into())
}

/// Read a `google.maps.LatLng` (methods `lat()` / `lng()`).
fn read_lat_lng(value: &JsValue) -> Result<LatLng> {
    let lat = call(value, "lat", &Array::new())?.as_f64();
    let lng = call(value, "lng", &Array::new())?.as_f64();
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(LatLng { lat, lng }),
        _ => Err(ClientError::Js("latLng without numeric coordinates".into())),
    }
}

pub struct MapWidget {
    map: JsValue,
    marker: Option<JsValue>,
    listener: Option<JsValue>,
    _on_click: Option<Closure<dyn FnMut(JsValue)>>,
}

impl MapWidget {
    pub fn new(container: &Element, center: LatLng, zoom: u8) -> Result<Self> {
        let opts = Object::new();
        set(&opts, "center", &lat_lng_literal(center)?)?;
        set(&opts, "zoom", &JsValue::from_f64(zoom as f64))?;
        let map = construct("Map", &Array::of2(container, &opts))?;
        clog(&format!("map: init center={},{} zoom={}", center.lat, center.lng, zoom));
        Ok(Self { map, marker: None, listener: None, _on_click: None })
    }

    /// Place the widget's marker at `pos`, replacing any earlier one.
    pub fn show_marker(&mut self, pos: LatLng) -> Result<()> {
        self.clear_marker();
        let opts = Object::new();
        set(&opts, "position", &lat_lng_literal(pos)?)?;
        set(&opts, "map", &self.map)?;
        self.marker = Some(construct("Marker", &Array::of1(&opts))?);
        Ok(())
    }

    pub fn pan_to(&self, pos: LatLng) -> Result<()> {
        call(&self.map, "panTo", &Array::of1(&lat_lng_literal(pos)?))?;
        Ok(())
    }

    /// Invoke `on_click` with the clicked coordinates. Replaces an earlier listener.
    pub fn on_click(&mut self, on_click: impl Fn(LatLng) + 'static) -> Result<()> {
        self.remove_listener();
        let cb = Closure::wrap(Box::new(move |event: JsValue| {
            match get(&event, "latLng").and_then(|v| read_lat_lng(&v)) {
                Ok(pos) => on_click(pos),
                Err(e) => clog(&format!("map: click ignored: {}", e)),
            }
        }) as Box<dyn FnMut(JsValue)>);
        let handle = call(
            &self.map,
            "addListener",
            &Array::of2(&JsValue::from_str("click"), cb.as_ref()),
        )?;
        self.listener = Some(handle);
        self._on_click = Some(cb);
        Ok(())
    }

    fn clear_marker(&mut self) {
        if let Some(marker) = self.marker.take() {
            let _ = call(&marker, "setMap", &Array::of1(&JsValue::NULL));
        }
    }

    fn remove_listener(&mut self) {
        if let Some(handle) = self.listener.take() {
            let _ = call(&handle, "remove", &Array::new());
        }
        self._on_click = None;
    }
}

impl Drop for MapWidget {
    fn drop(&mut self) {
        self.remove_listener();
        self.clear_marker();
    }
}

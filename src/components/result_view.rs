use yew::prelude::*;

use crate::error::ClientError;
use crate::model::LatLng;
use crate::state::dom::target_from_inputs;
use crate::state::maps::MapWidget;
use crate::state::navigation::{Route, navigate};
use crate::util::cwarn;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultViewProps {
    /// Falls back to the page's `lat` / `lng` inputs.
    pub target: Option<LatLng>,
    pub zoom: u8,
}

#[function_component(ResultView)]
pub fn result_view(props: &ResultViewProps) -> Html {
    let map_ref = use_node_ref();
    let widget = use_mut_ref(|| None::<MapWidget>);
    {
        let map_ref = map_ref.clone();
        let widget = widget.clone();
        use_effect_with((props.target, props.zoom), move |&(target, zoom)| {
            let built = target
                .map(Ok)
                .unwrap_or_else(target_from_inputs)
                .and_then(|pos| {
                    let el = map_ref
                        .cast::<web_sys::Element>()
                        .ok_or_else(|| ClientError::MissingElement("map".into()))?;
                    let mut w = MapWidget::new(&el, pos, zoom)?;
                    w.show_marker(pos)?;
                    w.pan_to(pos)?;
                    Ok(w)
                });
            match built {
                Ok(w) => *widget.borrow_mut() = Some(w),
                Err(e) => cwarn(&format!("result: {}", e)),
            }
            move || {
                widget.borrow_mut().take();
            }
        });
    }
    html! {
        <div style="display:flex; flex-direction:column; gap:8px; align-items:center;">
            <div id="map" ref={map_ref} style="width:100%; height:400px;"></div>
            <div style="display:flex; gap:8px;">
                <button onclick={Callback::from(|_| navigate(Route::GamePage))}>{"Play Again"}</button>
                <button onclick={Callback::from(|_| navigate(Route::Leaderboard))}>{"Leaderboard"}</button>
                <button onclick={Callback::from(|_| navigate(Route::MainMenu))}>{"Main Menu"}</button>
            </div>
        </div>
    }
}

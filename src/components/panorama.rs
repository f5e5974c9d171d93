use yew::prelude::*;

use crate::model::{PanoramaAction, PanoramaState};

const YAW_STEP: f64 = 45.0;

#[derive(Properties, PartialEq, Clone)]
pub struct PanoramaProps {
    pub state: UseReducerHandle<PanoramaState>,
}

/// A-Frame sky showing the current gallery scene.
#[function_component(Panorama)]
pub fn panorama(props: &PanoramaProps) -> Html {
    let state = props.state.clone();
    let next_cb = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PanoramaAction::NextImage))
    };
    let left_cb = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PanoramaAction::Rotate(state.yaw - YAW_STEP)))
    };
    let right_cb = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PanoramaAction::Rotate(state.yaw + YAW_STEP)))
    };
    let pause_cb = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PanoramaAction::Pause))
    };
    let src = state.current_image().unwrap_or_default().to_string();

    html! {
        <div style="position:relative; width:100%; height:70vh;">
            <a-scene embedded="true">
                <a-sky id="sky" src={src} rotation={state.rotation_attr()}></a-sky>
            </a-scene>
            <div style="position:absolute; bottom:12px; left:50%; transform:translateX(-50%); display:flex; gap:8px;">
                <button onclick={left_cb}>{"⟲"}</button>
                <button onclick={next_cb}>{"Next Image"}</button>
                <button onclick={right_cb}>{"⟳"}</button>
                <button onclick={pause_cb}>{"Pause"}</button>
            </div>
        </div>
    }
}

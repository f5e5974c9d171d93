use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::model::{SliderAction, SliderState};
use crate::util::{cwarn, timer_delay};

#[derive(Properties, PartialEq, Clone)]
pub struct ImageSliderProps {
    pub images: Vec<String>,
    pub interval_ms: u32,
}

#[function_component(ImageSlider)]
pub fn image_slider(props: &ImageSliderProps) -> Html {
    let slider = use_reducer({
        let len = props.images.len();
        move || SliderState::new(len)
    });
    {
        let slider = slider.clone();
        use_effect_with((props.images.len(), props.interval_ms), move |&(len, interval)| {
            let mut active: Option<(web_sys::Window, i32, Closure<dyn FnMut()>)> = None;
            if len > 1 {
                if let Some(window) = web_sys::window() {
                    let tick = Closure::wrap(Box::new(move || slider.dispatch(SliderAction::Advance))
                        as Box<dyn FnMut()>);
                    match window.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        timer_delay(interval),
                    ) {
                        Ok(id) => active = Some((window, id, tick)),
                        Err(e) => cwarn(&format!("slider: {:?}", e)),
                    }
                }
            }
            move || {
                if let Some((window, id, _tick)) = active {
                    window.clear_interval_with_handle(id);
                }
            }
        });
    }
    html! {
        <div id="imageSlider">
            { for props.images.iter().enumerate().map(|(i, src)| html! {
                <img src={src.clone()} style={format!("display:{}; max-width:100%;", slider.display_for(i))} />
            }) }
        </div>
    }
}

use yew::prelude::*;

use crate::error::{self, ClientError};
use crate::model::{GuessAction, GuessState, LatLng, SubmitStatus};
use crate::state::dom::csrf_token;
use crate::state::maps::MapWidget;
use crate::state::navigation::{Route, navigate};
use crate::state::submit::submit_coordinates;
use crate::util::{clog, cwarn};

#[derive(Properties, PartialEq, Clone)]
pub struct GuessPanelProps {
    pub center: LatLng,
    pub zoom: u8,
}

/// Map the player clicks to drop their guess, plus the submit button.
#[function_component(GuessPanel)]
pub fn guess_panel(props: &GuessPanelProps) -> Html {
    let map_ref = use_node_ref();
    let widget = use_mut_ref(|| None::<MapWidget>);
    let guess = use_reducer(GuessState::default);

    // Map setup / teardown
    {
        let map_ref = map_ref.clone();
        let widget = widget.clone();
        let guess = guess.clone();
        use_effect_with((props.center, props.zoom), move |&(center, zoom)| {
            let built = map_ref
                .cast::<web_sys::Element>()
                .ok_or_else(|| ClientError::MissingElement("map".into()))
                .and_then(|el| MapWidget::new(&el, center, zoom))
                .and_then(|mut w| {
                    w.on_click(move |pos| guess.dispatch(GuessAction::Place(pos)))?;
                    Ok(w)
                });
            match built {
                Ok(w) => *widget.borrow_mut() = Some(w),
                Err(e) => cwarn(&format!("guess: map unavailable: {}", e)),
            }
            move || {
                widget.borrow_mut().take();
            }
        });
    }
    // Keep the single marker in sync with the placed guess.
    {
        let widget = widget.clone();
        use_effect_with(guess.marker, move |marker| {
            if let (Some(pos), Some(w)) = (*marker, widget.borrow_mut().as_mut()) {
                let placed = w.show_marker(pos).and_then(|_| w.pan_to(pos));
                if let Err(e) = placed {
                    cwarn(&format!("guess: marker: {}", e));
                }
            }
            || ()
        });
    }

    let submit_cb = {
        let guess = guess.clone();
        Callback::from(move |_| {
            if guess.status == SubmitStatus::Sending {
                return;
            }
            let pos = match guess.submission_target() {
                Ok(pos) => pos,
                Err(e) => {
                    guess.dispatch(GuessAction::Failed(e.to_string()));
                    return;
                }
            };
            let done = {
                let guess = guess.clone();
                Callback::from(move |outcome: error::Result<()>| match outcome {
                    Ok(()) => {
                        clog("guess: accepted");
                        navigate(Route::ResultPage);
                    }
                    Err(e) => {
                        cwarn(&format!("guess: {}", e));
                        guess.dispatch(GuessAction::Failed(e.to_string()));
                    }
                })
            };
            let sent = csrf_token().and_then(|token| submit_coordinates(pos, &token, done));
            match sent {
                Ok(()) => guess.dispatch(GuessAction::Sending),
                Err(e) => guess.dispatch(GuessAction::Failed(e.to_string())),
            }
        })
    };

    let status = match &guess.status {
        SubmitStatus::Idle => html! {},
        SubmitStatus::Sending => html! { <span style="opacity:0.7;">{"Submitting…"}</span> },
        SubmitStatus::Failed(msg) => html! { <span style="color:#f85149;">{ msg.clone() }</span> },
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:8px;">
            <div id="map" ref={map_ref} style="width:100%; height:320px;"></div>
            <div style="display:flex; gap:8px; align-items:center;">
                <button onclick={submit_cb} disabled={guess.status == SubmitStatus::Sending}>{"Submit"}</button>
                { status }
            </div>
        </div>
    }
}

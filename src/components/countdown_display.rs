use std::rc::Rc;
use yew::prelude::*;

use crate::state::countdown::{BrowserScheduler, start_countdown};
use crate::util::cwarn;

#[derive(Properties, PartialEq, Clone)]
pub struct CountdownDisplayProps {
    pub minutes: u32,
    #[prop_or_default]
    pub on_exhausted: Callback<()>,
}

/// Renders the running clock into `#counter`. The countdown is cancelled when
/// the component unmounts or `minutes` changes.
#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownDisplayProps) -> Html {
    let text = use_state(String::new);
    {
        let text = text.clone();
        let on_exhausted = props.on_exhausted.clone();
        use_effect_with(props.minutes, move |&minutes| {
            let started = BrowserScheduler::new().and_then(|scheduler| {
                start_countdown(
                    Rc::new(scheduler),
                    minutes,
                    move |t| text.set(t.to_string()),
                    move || on_exhausted.emit(()),
                )
            });
            let handle = match started {
                Ok(h) => Some(h),
                Err(e) => {
                    cwarn(&format!("countdown: {}", e));
                    None
                }
            };
            move || drop(handle)
        });
    }
    html! {
        <div id="counter" style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">{ (*text).clone() }</div>
    }
}

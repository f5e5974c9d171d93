use yew::prelude::*;

use super::{
    countdown_display::CountdownDisplay, guess_panel::GuessPanel, panorama::Panorama,
    pause_menu::PauseMenu,
};
use crate::model::{LatLng, PanoramaAction, PanoramaState};
use crate::state::navigation::{Route, navigate, reload};
use crate::util::{clog, cwarn, random, shuffle};

#[derive(Properties, PartialEq, Clone)]
pub struct GamePageProps {
    pub gallery: Vec<String>,
    pub countdown_minutes: u32,
    pub map_center: LatLng,
    pub zoom: u8,
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let panorama = use_reducer({
        let gallery = props.gallery.clone();
        move || {
            let mut gallery = gallery;
            shuffle(&mut gallery, random);
            PanoramaState::new(gallery)
        }
    });
    let time_up = use_state(|| false);

    let on_exhausted = {
        let time_up = time_up.clone();
        Callback::from(move |_| {
            clog("game: time up");
            time_up.set(true);
        })
    };
    let on_resume = {
        let panorama = panorama.clone();
        Callback::from(move |_| panorama.dispatch(PanoramaAction::Resume))
    };
    let on_restart = Callback::from(|_| {
        if let Err(e) = reload() {
            cwarn(&format!("game: reload: {}", e));
        }
    });
    let on_main_menu = Callback::from(|_| navigate(Route::MainMenu));
    let on_volume = {
        let panorama = panorama.clone();
        Callback::from(move |v: f64| {
            clog(&format!("game: volume={}", v));
            panorama.dispatch(PanoramaAction::SetVolume(v));
        })
    };

    html! {
        <div style="position:relative; display:flex; flex-direction:column; gap:12px; padding:12px;">
            <div style="display:flex; justify-content:center; align-items:center; gap:12px;">
                <CountdownDisplay minutes={props.countdown_minutes} {on_exhausted} />
                if *time_up {
                    <span style="color:#f85149; font-weight:600;">{"Time's up!"}</span>
                }
            </div>
            <Panorama state={panorama.clone()} />
            <GuessPanel center={props.map_center} zoom={props.zoom} />
            <PauseMenu
                show={panorama.paused}
                volume={panorama.volume}
                {on_resume}
                {on_restart}
                {on_main_menu}
                {on_volume}
            />
        </div>
    }
}

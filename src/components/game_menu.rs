use yew::prelude::*;

use crate::model::{DifficultyAction, DifficultyState, PanelVisibility};
use crate::state::cookies::DocumentCookies;
use crate::state::difficulty::{apply_selection, initial_difficulty};
use crate::state::navigation::{Route, navigate};
use crate::util::cwarn;

#[derive(Properties, PartialEq, Clone)]
pub struct GameMenuProps {
    pub difficulties: Vec<String>,
    pub default_difficulty: String,
    pub game_modes: Vec<String>,
}

#[function_component(GameMenu)]
pub fn game_menu(props: &GameMenuProps) -> Html {
    let cookies = use_memo((), |_| match DocumentCookies::from_window() {
        Ok(c) => Some(c),
        Err(e) => {
            cwarn(&format!("difficulty: cookies unavailable: {}", e));
            None
        }
    });
    let difficulty = {
        let cookies = cookies.clone();
        let options = props.difficulties.clone();
        let default = props.default_difficulty.clone();
        use_reducer(move || match (*cookies).as_ref() {
            Some(c) => initial_difficulty(c, options, &default),
            None => DifficultyState::new(options, default),
        })
    };
    let game_mode_panel = use_state(PanelVisibility::default);

    let toggle_difficulty = {
        let difficulty = difficulty.clone();
        Callback::from(move |_| difficulty.dispatch(DifficultyAction::TogglePanel))
    };
    let toggle_game_mode = {
        let panel = game_mode_panel.clone();
        Callback::from(move |_| panel.set(panel.toggled()))
    };
    // Cookie first; the marker only moves once the label is persisted.
    let select = {
        let difficulty = difficulty.clone();
        let cookies = cookies.clone();
        Callback::from(move |label: String| {
            let Some(c) = (*cookies).as_ref() else {
                return;
            };
            match apply_selection(c, &label) {
                Ok(action) => difficulty.dispatch(action),
                Err(e) => cwarn(&format!("difficulty: {}", e)),
            }
        })
    };

    let option_buttons = difficulty.options.iter().map(|label| {
        let select = select.clone();
        let value = label.clone();
        let onclick = Callback::from(move |_| select.emit(value.clone()));
        html! { <button class={difficulty.option_class(label)} {onclick}>{ label.clone() }</button> }
    });
    let mode_buttons = props
        .game_modes
        .iter()
        .map(|mode| html! { <button class="game-mode-option">{ mode.clone() }</button> });

    html! {
        <div class="game-menu" style="display:flex; flex-direction:column; align-items:center; gap:10px;">
            <button id="difficultyButton" onclick={toggle_difficulty}>{"Difficulty"}</button>
            <div id="difficultySubButtons" style={format!("display:{};", difficulty.panel.css_display())}>
                { for option_buttons }
            </div>
            <button id="gameButton" onclick={toggle_game_mode}>{"Game Mode"}</button>
            <div id="gameModeSubButtons" style={format!("display:{};", game_mode_panel.css_display())}>
                { for mode_buttons }
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap; justify-content:center;">
                <button onclick={Callback::from(|_| navigate(Route::GamePrep))}>{"Play"}</button>
                <button onclick={Callback::from(|_| navigate(Route::GamePage))}>{"Go"}</button>
                <button onclick={Callback::from(|_| navigate(Route::Leaderboard))}>{"Leaderboard"}</button>
                <button onclick={Callback::from(|_| navigate(Route::SignUp))}>{"Sign Up"}</button>
            </div>
        </div>
    }
}

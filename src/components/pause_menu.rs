use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PauseMenuProps {
    pub show: bool,
    pub volume: f64,
    pub on_resume: Callback<()>,
    pub on_restart: Callback<()>,
    pub on_main_menu: Callback<()>,
    pub on_volume: Callback<f64>,
}

#[function_component(PauseMenu)]
pub fn pause_menu(props: &PauseMenuProps) -> Html {
    let resume_cb = {
        let cb = props.on_resume.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let restart_cb = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let main_menu_cb = {
        let cb = props.on_main_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let volume_cb = {
        let cb = props.on_volume.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                cb.emit(v);
            }
        })
    };
    let display = if props.show { "flex" } else { "none" };

    html! {<div id="pause-menu" style={format!("display:{}; position:absolute; inset:0; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;", display)}>
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:280px; display:flex; flex-direction:column; gap:12px; color:#fff;">
            <h3 style="margin:0; font-size:18px;">{"Paused"}</h3>
            <button onclick={resume_cb}>{"Resume"}</button>
            <button onclick={restart_cb}>{"Restart"}</button>
            <button onclick={main_menu_cb}>{"Main Menu"}</button>
            <label style="display:flex; align-items:center; gap:8px;">
                <span>{"Volume"}</span>
                <input type="range" min="0" max="1" step="0.05" value={props.volume.to_string()} oninput={volume_cb} />
            </label>
        </div>
    </div>}
}

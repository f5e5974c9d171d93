use super::{
    game_menu::GameMenu, game_page::GamePage, guess_panel::GuessPanel, header::Header,
    image_slider::ImageSlider, result_view::ResultView,
};
use crate::config::{PageConfig, PageKind};
use crate::util::clog;
use yew::prelude::*;

/// Root component. The server decides which page this is through the inline config.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| {
        let cfg = PageConfig::load();
        clog(&format!("app: page={:?}", cfg.page));
        cfg
    });

    let content = match config.page {
        PageKind::MainMenu => html! { <GameMenu
            difficulties={config.difficulties.clone()}
            default_difficulty={config.default_difficulty.clone()}
            game_modes={config.game_modes.clone()}
        /> },
        PageKind::Game => html! { <GamePage
            gallery={config.gallery.clone()}
            countdown_minutes={config.countdown_minutes}
            map_center={config.map_center}
            zoom={config.guess_zoom}
        /> },
        PageKind::Guess => html! { <GuessPanel center={config.map_center} zoom={config.guess_zoom} /> },
        PageKind::Result => html! { <ResultView target={config.target} zoom={config.result_zoom} /> },
        PageKind::Slider => html! { <ImageSlider
            images={config.slider_images.clone()}
            interval_ms={config.slider_interval_ms}
        /> },
    };

    html! {
        <>
            <Header />
            { content }
        </>
    }
}

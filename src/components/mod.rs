pub mod app;
pub mod countdown_display;
pub mod game_menu;
pub mod game_page;
pub mod guess_panel;
pub mod header;
pub mod image_slider;
pub mod panorama;
pub mod pause_menu;
pub mod result_view;

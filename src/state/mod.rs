pub mod cookies;
pub mod countdown;
pub mod difficulty;
pub mod dom;
pub mod maps;
pub mod navigation;
pub mod submit;


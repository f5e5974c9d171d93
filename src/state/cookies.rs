// Cookie access behind a small trait so the difficulty menu can be tested off-browser.
#[cfg(test)]
use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::error::{ClientError, Result};

/// Cookie holding the chosen difficulty label.
pub const DIFFICULTY_COOKIE: &str = "diff";

pub trait CookieStore {
    fn get(&self, name: &str) -> Result<Option<String>>;
    /// Session cookie, default path, no expiry.
    fn set(&self, name: &str, value: &str) -> Result<()>;
}

/// Find `name` in a `document.cookie` style header. First match wins.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

/// `name=value` with no path, expiry or other attributes: a session cookie.
pub fn session_cookie(name: &str, value: &str) -> String {
    format!("{}={}", name, value)
}

pub struct DocumentCookies {
    doc: HtmlDocument,
}

impl DocumentCookies {
    pub fn from_window() -> Result<Self> {
        let doc = web_sys::window()
            .ok_or(ClientError::NoWindow)?
            .document()
            .ok_or(ClientError::NoDocument)?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| ClientError::NoDocument)?;
        Ok(Self { doc })
    }
}

impl CookieStore for DocumentCookies {
    fn get(&self, name: &str) -> Result<Option<String>> {
        let header = self.doc.cookie()?;
        Ok(parse_cookie(&header, name))
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        self.doc.set_cookie(&session_cookie(name, value))?;
        Ok(())
    }
}

/// In-memory jar, also counts writes.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryCookies {
    jar: RefCell<Vec<(String, String)>>,
    writes: RefCell<usize>,
}

#[cfg(test)]
impl MemoryCookies {
    pub fn with(name: &str, value: &str) -> Self {
        let jar = MemoryCookies::default();
        jar.jar.borrow_mut().push((name.to_string(), value.to_string()));
        jar
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

#[cfg(test)]
impl CookieStore for MemoryCookies {
    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.jar.borrow().iter().find(|(k, _)| k == name).map(|(_, v)| v.clone()))
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        let mut jar = self.jar.borrow_mut();
        match jar.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => jar.push((name.to_string(), value.to_string())),
        }
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_finds_trimmed_value() {
        let header = "session=abc; diff=Expert ;theme=dark";
        assert_eq!(parse_cookie(header, "diff").as_deref(), Some("Expert"));
        assert_eq!(parse_cookie(header, "theme").as_deref(), Some("dark"));
        assert_eq!(parse_cookie(header, "missing"), None);
        assert_eq!(parse_cookie("", "diff"), None);
    }

    #[test]
    fn parse_does_not_match_prefix() {
        assert_eq!(parse_cookie("difficulty=Hard", "diff"), None);
        assert_eq!(parse_cookie("diff=A; diff=B", "diff").as_deref(), Some("A"));
    }

    #[test]
    fn session_cookie_has_no_attributes() {
        let raw = session_cookie(DIFFICULTY_COOKIE, "Expert");
        assert_eq!(raw, "diff=Expert");
        assert!(!raw.contains(';'));
        assert_eq!(parse_cookie(&raw, DIFFICULTY_COOKIE).as_deref(), Some("Expert"));
    }

    #[test]
    fn memory_jar_overwrites() {
        let jar = MemoryCookies::default();
        jar.set("diff", "Beginner").unwrap();
        jar.set("diff", "Expert").unwrap();
        assert_eq!(jar.get("diff").unwrap().as_deref(), Some("Expert"));
        assert_eq!(jar.writes(), 2);
    }
}

use crate::error::Result;
use crate::model::{DifficultyAction, DifficultyState};
use crate::state::cookies::{CookieStore, DIFFICULTY_COOKIE};
use crate::util::clog;

/// Initial menu state: the persisted label, or `default` when no cookie is set.
/// Read-only; nothing is written until the player picks an option.
pub fn initial_difficulty(
    cookies: &dyn CookieStore,
    options: Vec<String>,
    default: &str,
) -> DifficultyState {
    let selected = match cookies.get(DIFFICULTY_COOKIE) {
        Ok(Some(label)) => label,
        Ok(None) => default.to_string(),
        Err(e) => {
            clog(&format!("difficulty: cookie read failed: {}", e));
            default.to_string()
        }
    };
    DifficultyState::new(options, selected)
}

/// Persist `label` and return the action that marks it selected.
pub fn apply_selection(cookies: &dyn CookieStore, label: &str) -> Result<DifficultyAction> {
    cookies.set(DIFFICULTY_COOKIE, label)?;
    clog(&format!("difficulty: selected={}", label));
    Ok(DifficultyAction::Select(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::cookies::MemoryCookies;
    use std::rc::Rc;
    use yew::Reducible;

    fn labels() -> Vec<String> {
        vec!["Beginner".into(), "Intermediate".into(), "Expert".into()]
    }

    #[test]
    fn default_applied_without_writing_cookie() {
        let jar = MemoryCookies::default();
        let state = initial_difficulty(&jar, labels(), "Beginner");
        assert_eq!(state.marked_options(), vec!["Beginner"]);
        assert_eq!(jar.writes(), 0);
        assert_eq!(jar.get(DIFFICULTY_COOKIE).unwrap(), None);
    }

    #[test]
    fn persisted_label_restored() {
        let jar = MemoryCookies::with(DIFFICULTY_COOKIE, "Expert");
        let state = initial_difficulty(&jar, labels(), "Beginner");
        assert_eq!(state.selected, "Expert");
        assert_eq!(jar.writes(), 0);
    }

    #[test]
    fn selection_updates_cookie_and_marker() {
        let jar = MemoryCookies::default();
        let mut state = Rc::new(initial_difficulty(&jar, labels(), "Beginner"));
        for label in labels() {
            let action = apply_selection(&jar, &label).unwrap();
            state = state.reduce(action);
            assert_eq!(jar.get(DIFFICULTY_COOKIE).unwrap().as_deref(), Some(label.as_str()));
            assert_eq!(state.marked_options(), vec![label.as_str()]);
        }
    }
}

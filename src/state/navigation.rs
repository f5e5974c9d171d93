use crate::error::{ClientError, Result};
use crate::util::{clog, cwarn};

/// Server pages the client can send the player to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    MainMenu,
    Leaderboard,
    SignUp,
    GamePrep,
    GamePage,
    ResultPage,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::MainMenu => "/",
            Route::Leaderboard => "/leaderboard",
            Route::SignUp => "/signup",
            Route::GamePrep => "/gameprep",
            Route::GamePage => "/gamepage",
            Route::ResultPage => "/resultpage",
        }
    }
}

fn location() -> Result<web_sys::Location> {
    Ok(web_sys::window().ok_or(ClientError::NoWindow)?.location())
}

pub fn redirect(route: Route) -> Result<()> {
    clog(&format!("navigate: {}", route.path()));
    location()?.set_href(route.path())?;
    Ok(())
}

/// Fire-and-forget variant for click handlers.
pub fn navigate(route: Route) {
    if let Err(e) = redirect(route) {
        cwarn(&format!("navigate: {}: {}", route.path(), e));
    }
}

pub fn reload() -> Result<()> {
    location()?.reload()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_server_paths() {
        assert_eq!(Route::Leaderboard.path(), "/leaderboard");
        assert_eq!(Route::SignUp.path(), "/signup");
        assert_eq!(Route::GamePrep.path(), "/gameprep");
        assert_eq!(Route::GamePage.path(), "/gamepage");
        assert_eq!(Route::ResultPage.path(), "/resultpage");
        assert_eq!(Route::MainMenu.path(), "/");
    }
}

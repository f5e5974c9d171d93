use yew::prelude::*;

use crate::state::navigation::{Route, navigate};

#[function_component(Header)]
pub fn header() -> Html {
    let login = Callback::from(|_| navigate(Route::SignUp));
    html! {
        <header>
            <div class="banner" style="display:flex; justify-content:space-between; align-items:center; padding:8px 16px; background:#005035; color:#fff;">
                <h1 style="margin:0; font-size:24px;">{"NinerNav"}</h1>
                <button class="login-btn" onclick={login}>{"Login"}</button>
            </div>
            <br />
        </header>
    }
}

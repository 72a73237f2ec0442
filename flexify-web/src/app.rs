use crate::api::FlexifyClient;
use crate::components::Loading;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch_with_logout};
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let client = FlexifyClient::shared();
            let hydrated = AppState::from_session(client.session());
            let authenticated = hydrated.authenticated;
            dispatch.set(hydrated);

            if authenticated {
                spawn_local(async move {
                    match client.current_user().await {
                        Ok(user) if dispatch.get().authenticated => {
                            dispatch.set(AppState::signed_in(user));
                        }
                        Ok(_) => log::debug!("signed out before the profile arrived"),
                        Err(err) if err.requires_login() => {
                            log::info!("stored session is no longer valid: {err}");
                            dispatch.set(AppState::signed_out());
                        }
                        Err(err) => log::warn!("unable to refresh user profile: {err}"),
                    }
                });
            }
            || ()
        });
    }

    let on_logout = Callback::from(move |()| {
        FlexifyClient::shared().logout();
        dispatch.set(AppState::signed_out());
    });

    if !state.hydrated {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| switch_with_logout(route, on_logout.clone())} />
        </BrowserRouter>
    }
}

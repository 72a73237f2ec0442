use crate::{
    api::FlexifyClient, components::Loading, models::app_state::AppState, routes::MainRoute,
    storage::take_oauth_state,
};
use i18nrs::yew::use_translation;
use shared::oauth::parse_implicit_fragment;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Landing page for the Google redirect. Exchanges the access token from the
/// URL fragment for a Flexify session.
#[function_component(GoogleCallbackPage)]
pub fn google_callback_page() -> Html {
    let (i18n, ..) = use_translation();
    let (_, dispatch) = use_store::<AppState>();
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();
    let failed_message = i18n.t("google.failed");

    {
        let error = error.clone();
        use_effect_with((), move |_| {
            let fragment = web_sys::window()
                .and_then(|window| window.location().hash().ok())
                .unwrap_or_default();
            let expected_state = take_oauth_state();

            match parse_implicit_fragment(&fragment)
                .and_then(|grant| grant.verify_state(expected_state.as_deref()))
            {
                Ok(grant) => spawn_local(async move {
                    match FlexifyClient::shared().google_auth(&grant.access_token).await {
                        Ok(auth) => {
                            if let Some(navigator) = navigator {
                                navigator.replace(&MainRoute::Home);
                            }
                            dispatch.set(AppState::signed_in(auth.user));
                        }
                        Err(err) => {
                            log::warn!("google token exchange failed: {err}");
                            error.set(Some(err.user_message(&failed_message)));
                        }
                    }
                }),
                Err(err) => {
                    log::warn!("google sign-in callback rejected: {err}");
                    error.set(Some(failed_message));
                }
            }
            || ()
        });
    }

    let Some(message) = (*error).clone() else {
        return html! { <Loading /> };
    };

    html! {
        <div class="flex min-h-screen items-center justify-center px-4 flexify-gradient">
            <div class="card w-full max-w-md bg-base-100 shadow-lg">
                <div class="card-body items-center text-center gap-4">
                    <div role="alert" class="alert alert-error">
                        <span>{ message }</span>
                    </div>
                    <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary">
                        { i18n.t("google.back") }
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}

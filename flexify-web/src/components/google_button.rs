use shared::oauth::google_authorize_url;
use uuid::Uuid;
use yew::{AttrValue, Callback, Html, MouseEvent, Properties, function_component, html};
use yew_router::Routable;

use crate::config::FrontendConfig;
use crate::routes::MainRoute;
use crate::storage::remember_oauth_state;

#[derive(Properties, PartialEq)]
pub struct GoogleButtonProps {
    pub label: AttrValue,
    #[prop_or(false)]
    pub disabled: bool,
    /// Receives a message when the redirect cannot be started.
    pub on_error: Callback<String>,
}

fn start_google_sign_in(client_id: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no browser window")?;
    let origin = window
        .location()
        .origin()
        .map_err(|err| format!("unable to read page origin: {err:?}"))?;
    let redirect_uri = format!("{origin}{}", MainRoute::GoogleCallback.to_path());

    let state = Uuid::new_v4().to_string();
    let url = google_authorize_url(client_id, &redirect_uri, &state)
        .map_err(|err| format!("invalid Google sign-in URL: {err}"))?;

    remember_oauth_state(&state);
    window
        .location()
        .set_href(url.as_str())
        .map_err(|err| format!("unable to open Google sign-in: {err:?}"))
}

/// Starts the Google implicit-flow redirect. Renders nothing when no client
/// id is configured.
#[function_component(GoogleButton)]
pub fn google_button(props: &GoogleButtonProps) -> Html {
    let config = FrontendConfig::new();
    let Some(client_id) = config.google_client_id().map(ToString::to_string) else {
        return Html::default();
    };

    let onclick = {
        let on_error = props.on_error.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Err(err) = start_google_sign_in(&client_id) {
                log::error!("google sign-in failed to start: {err}");
                on_error.emit("Google sign-in failed. Please try again.".to_string());
            }
        })
    };

    html! {
        <button
            type="button"
            class="btn btn-outline w-full gap-3"
            disabled={props.disabled}
            {onclick}
        >
            <svg class="w-5 h-5" viewBox="0 0 48 48" aria-hidden="true">
                <path fill="#FFC107" d="M43.6 20.5H42V20H24v8h11.3C33.7 32.7 29.2 36 24 36c-6.6 0-12-5.4-12-12s5.4-12 12-12c3.1 0 5.8 1.2 7.9 3.1l5.7-5.7C34 6.1 29.3 4 24 4 12.9 4 4 12.9 4 24s8.9 20 20 20 20-8.9 20-20c0-1.3-.1-2.4-.4-3.5z" />
                <path fill="#FF3D00" d="M6.3 14.7l6.6 4.8C14.7 15.1 19 12 24 12c3.1 0 5.8 1.2 7.9 3.1l5.7-5.7C34 6.1 29.3 4 24 4 16.3 4 9.7 8.3 6.3 14.7z" />
                <path fill="#4CAF50" d="M24 44c5.2 0 9.9-2 13.4-5.2l-6.2-5.2C29.2 35.1 26.7 36 24 36c-5.2 0-9.6-3.3-11.3-7.9l-6.5 5C9.5 39.6 16.2 44 24 44z" />
                <path fill="#1976D2" d="M43.6 20.5H42V20H24v8h11.3c-.8 2.2-2.2 4.2-4.1 5.6l6.2 5.2C36.9 39.2 44 34 44 24c0-1.3-.1-2.4-.4-3.5z" />
            </svg>
            { props.label.clone() }
        </button>
    }
}

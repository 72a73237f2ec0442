use crate::{
    api::FlexifyClient,
    components::{
        GoogleButton, LabeledInput, Notification, NotificationMessage, PasswordInput, Typewriter,
    },
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::models::{FormField, LoginRequest};
use shared::validation::validate_login;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

pub const INTRO_PHRASES: [&str; 2] = ["Welcome to Flexify", "Log in to Continue"];

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let (_, dispatch) = use_store::<AppState>();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let intro_done = use_state(|| false);
    let loading = use_state(|| false);
    let missing = use_state(|| None::<FormField>);
    let notification = use_state(|| None::<NotificationMessage>);
    let navigator = use_navigator();

    let failed_message = i18n.t("login.failed");
    let required_message = i18n.t("validation.required");

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let loading = loading.clone();
        let missing = missing.clone();
        let notification = notification.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }
            if let Err((field, _)) = validate_login(&username, &password) {
                missing.set(Some(field));
                return;
            }
            missing.set(None);
            loading.set(true);

            let request = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let loading = loading.clone();
            let notification = notification.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let failed_message = failed_message.clone();
            spawn_local(async move {
                match FlexifyClient::shared().login(&request).await {
                    Ok(auth) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Home);
                        }
                        dispatch.set(AppState::signed_in(auth.user));
                    }
                    Err(err) => {
                        log::warn!("login failed ({:?}): {err}", err.status());
                        notification.set(Some(NotificationMessage::error(
                            err.user_message(&failed_message),
                        )));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_username = {
        let username = username.clone();
        Callback::from(move |value: String| username.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };
    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |()| show_password.set(!*show_password))
    };
    let on_intro_complete = {
        let intro_done = intro_done.clone();
        Callback::from(move |()| intro_done.set(true))
    };
    let on_notification_close = {
        let notification = notification.clone();
        Callback::from(move |()| notification.set(None))
    };
    let on_google_error = {
        let notification = notification.clone();
        Callback::from(move |message: String| {
            notification.set(Some(NotificationMessage::error(message)));
        })
    };

    let is_busy = *loading;
    let disable_submit = is_busy || username.trim().is_empty() || password.is_empty();
    let error_for = |field: FormField| (*missing == Some(field)).then(|| required_message.clone());

    html! {
        <div class="flex min-h-screen flex-col items-center justify-center gap-8 px-4 flexify-gradient">
            <Notification message={(*notification).clone()} on_close={on_notification_close} />
            <Typewriter
                phrases={INTRO_PHRASES.into_iter().map(AttrValue::from).collect::<Vec<_>>()}
                on_complete={on_intro_complete}
                class="text-center"
            />
            if *intro_done {
                <div class="card w-full max-w-md shadow-lg bg-base-100 fade-in">
                    <form class="card-body gap-2" {onsubmit}>
                        <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                        <LabeledInput
                            id="username"
                            label={i18n.t("auth.username")}
                            value={(*username).clone()}
                            on_input={on_username}
                            autocomplete="username"
                            disabled={is_busy}
                            error={error_for(FormField::Username)}
                        />
                        <PasswordInput
                            id="password"
                            label={i18n.t("auth.password")}
                            value={(*password).clone()}
                            on_input={on_password}
                            visible={*show_password}
                            on_toggle={on_toggle_password}
                            autocomplete="current-password"
                            disabled={is_busy}
                            error={error_for(FormField::Password)}
                        />
                        <div class="form-control mt-4">
                            <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                                if is_busy {
                                    <span class="loading loading-spinner loading-sm"></span>
                                    { i18n.t("login.submitting") }
                                } else {
                                    { i18n.t("login.submit") }
                                }
                            </button>
                        </div>
                        <div class="divider text-xs">{ i18n.t("auth.or") }</div>
                        <GoogleButton
                            label={i18n.t("auth.google")}
                            disabled={is_busy}
                            on_error={on_google_error}
                        />
                        <p class="text-center text-sm mt-2">
                            { i18n.t("login.no_account") }{" "}
                            <Link<MainRoute> to={MainRoute::Signup} classes="link link-primary">
                                { i18n.t("login.signup_link") }
                            </Link<MainRoute>>
                        </p>
                    </form>
                </div>
            }
        </div>
    }
}

use crate::{
    api::FlexifyClient,
    components::{
        GoogleButton, LabeledInput, Notification, NotificationMessage, PasswordInput, Typewriter,
    },
    models::app_state::{AppState, PendingSignIn},
    routes::MainRoute,
};
use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use shared::models::{ApiErrorBody, FormField, RegisterRequest};
use shared::validation::{SignupErrors, SignupForm, ValidationError, validate_signup};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

pub const INTRO_PHRASES: [&str; 3] = [
    "Welcome to Flexify",
    "Your Fitness Journey Starts Now",
    "Let's get you signed in",
];

/// Delay between the success notification and leaving the page.
pub const REDIRECT_DELAY_MS: u32 = 1_500;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let (i18n, ..) = use_translation();
    let (_, dispatch) = use_store::<AppState>();
    let form = use_state(SignupForm::default);
    let errors = use_state(SignupErrors::default);
    let server_errors = use_state(ApiErrorBody::default);
    let show_password = use_state(|| false);
    let intro_done = use_state(|| false);
    let loading = use_state(|| false);
    let notification = use_state(|| None::<NotificationMessage>);
    let redirect = use_mut_ref(|| None::<Timeout>);
    let pending = use_mut_ref(PendingSignIn::default);
    let navigator = use_navigator();

    {
        let pending = pending.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            move || {
                // Leaving before the redirect still publishes the new session.
                let state = pending.borrow_mut().release();
                if let Some(state) = state {
                    dispatch.set(state);
                }
            }
        });
    }

    let failed_message = i18n.t("signup.failed");
    let success_message = i18n.t("signup.success");

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let server_errors = server_errors.clone();
        let loading = loading.clone();
        let notification = notification.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }

            let current = (*form).clone();
            let local_errors = validate_signup(&current);
            errors.set(local_errors);
            server_errors.set(ApiErrorBody::default());
            if !local_errors.is_empty() {
                return;
            }
            loading.set(true);

            let request = RegisterRequest {
                username: current.username.trim().to_string(),
                email: current.email.trim().to_string(),
                password: current.password,
            };
            let server_errors = server_errors.clone();
            let loading = loading.clone();
            let notification = notification.clone();
            let redirect = redirect.clone();
            let pending = pending.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let failed_message = failed_message.clone();
            let success_message = success_message.clone();
            spawn_local(async move {
                match FlexifyClient::shared().register(&request).await {
                    Ok(auth) => {
                        notification.set(Some(NotificationMessage::success(success_message)));
                        pending.borrow_mut().hold(auth.user);
                        let timeout = Timeout::new(REDIRECT_DELAY_MS, move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&MainRoute::Home);
                            }
                            let state = pending.borrow_mut().release();
                            if let Some(state) = state {
                                dispatch.set(state);
                            }
                        });
                        redirect.borrow_mut().replace(timeout);
                    }
                    Err(err) => {
                        log::warn!("signup failed: {err}");
                        if let Some(body) = err.body() {
                            server_errors.set(body.clone());
                        }
                        notification.set(Some(NotificationMessage::error(
                            err.user_message(&failed_message),
                        )));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let update = |apply: fn(&mut SignupForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_username = update(|form, value| form.username = value);
    let on_email = update(|form, value| form.email = value);
    let on_confirm_email = update(|form, value| form.confirm_email = value);
    let on_password = update(|form, value| form.password = value);
    let on_confirm_password = update(|form, value| form.confirm_password = value);

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

    // Local validation wins; otherwise show what the backend said about the field.
    let message_for = |local: Option<ValidationError>, field: Option<FormField>| {
        local.map(|err| i18n.t(err.message_key())).or_else(|| {
            field
                .and_then(|field| server_errors.field_error(field))
                .map(ToString::to_string)
        })
    };
    let username_error = message_for(errors.username, Some(FormField::Username));
    let email_error = message_for(errors.email, Some(FormField::Email));
    let confirm_email_error = message_for(errors.confirm_email, None);
    let password_error = message_for(errors.password, Some(FormField::Password));
    let confirm_password_error = message_for(errors.confirm_password, None);

    let is_busy = *loading;

    html! {
        <div class="flex min-h-screen flex-col items-center justify-center gap-8 px-4 py-10 flexify-gradient">
            <Notification message={(*notification).clone()} on_close={on_notification_close} />
            <Typewriter
                phrases={INTRO_PHRASES.into_iter().map(AttrValue::from).collect::<Vec<_>>()}
                on_complete={on_intro_complete}
                class="text-center"
            />
            if *intro_done {
                <div class="card w-full max-w-md shadow-lg bg-base-100 fade-in">
                    <form class="card-body gap-1" {onsubmit} novalidate=true>
                        <h2 class="card-title text-2xl">{ i18n.t("signup.title") }</h2>
                        <LabeledInput
                            id="username"
                            label={i18n.t("auth.username")}
                            value={form.username.clone()}
                            on_input={on_username}
                            autocomplete="username"
                            disabled={is_busy}
                            error={username_error}
                        />
                        <LabeledInput
                            id="email"
                            label={i18n.t("auth.email")}
                            value={form.email.clone()}
                            on_input={on_email}
                            input_type="email"
                            autocomplete="email"
                            disabled={is_busy}
                            error={email_error}
                        />
                        <LabeledInput
                            id="confirm-email"
                            label={i18n.t("auth.confirm_email")}
                            value={form.confirm_email.clone()}
                            on_input={on_confirm_email}
                            input_type="email"
                            autocomplete="email"
                            disabled={is_busy}
                            error={confirm_email_error}
                        />
                        <PasswordInput
                            id="password"
                            label={i18n.t("auth.password")}
                            value={form.password.clone()}
                            on_input={on_password}
                            visible={*show_password}
                            on_toggle={on_toggle_password.clone()}
                            autocomplete="new-password"
                            disabled={is_busy}
                            error={password_error}
                        />
                        <PasswordInput
                            id="confirm-password"
                            label={i18n.t("auth.confirm_password")}
                            value={form.confirm_password.clone()}
                            on_input={on_confirm_password}
                            visible={*show_password}
                            on_toggle={on_toggle_password}
                            autocomplete="new-password"
                            disabled={is_busy}
                            error={confirm_password_error}
                        />
                        <div class="form-control mt-4">
                            <button class="btn btn-primary" type="submit" disabled={is_busy}>
                                if is_busy {
                                    <span class="loading loading-spinner loading-sm"></span>
                                    { i18n.t("signup.submitting") }
                                } else {
                                    { i18n.t("signup.submit") }
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
                            { i18n.t("signup.have_account") }{" "}
                            <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                                { i18n.t("signup.login_link") }
                            </Link<MainRoute>>
                        </p>
                    </form>
                </div>
            }
        </div>
    }
}

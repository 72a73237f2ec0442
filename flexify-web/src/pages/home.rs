use crate::api::FlexifyClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Shortcut cards: translation key, icon, destination.
const QUICK_ACTIONS: [(&str, IconId, MainRoute); 4] = [
    ("home.actions.workouts", IconId::HeroiconsOutlineBolt, MainRoute::Workouts),
    ("home.actions.diet", IconId::HeroiconsOutlineFire, MainRoute::Diet),
    ("home.actions.chatbot", IconId::HeroiconsOutlineCpuChip, MainRoute::Chatbot),
    ("home.actions.profile", IconId::HeroiconsOutlineUser, MainRoute::Profile),
];

const FEATURES: [(&str, IconId); 4] = [
    ("home.features.coaching", IconId::HeroiconsOutlineCpuChip),
    ("home.features.workouts", IconId::HeroiconsOutlineBolt),
    ("home.features.nutrition", IconId::HeroiconsOutlineFire),
    ("home.features.analytics", IconId::HeroiconsOutlineChartBar),
];

const CHIPS: [&str; 3] = ["home.chips.coaching", "home.chips.analytics", "home.chips.plans"];

/// Landing page with the hero, quick actions and feature overview.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();
    let (state, _) = use_store::<AppState>();
    let server_message = use_state(|| None::<String>);

    {
        let server_message = server_message.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match FlexifyClient::shared().hello().await {
                    Ok(hello) => server_message.set(Some(hello.message)),
                    Err(err) => log::warn!("backend greeting unavailable: {err}"),
                }
            });
            || ()
        });
    }

    let call_to_action = if state.authenticated {
        html! {
            <Link<MainRoute> to={MainRoute::Workouts} classes="btn btn-primary btn-lg gap-2">
                { i18n.t("home.cta_signed_in") }
                <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5" />
            </Link<MainRoute>>
        }
    } else {
        html! {
            <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary btn-lg gap-2">
                <Icon icon_id={IconId::HeroiconsOutlinePlay} class="w-5 h-5" />
                { i18n.t("home.cta_guest") }
            </Link<MainRoute>>
        }
    };

    let welcome = state.display_name().map(|name| {
        html! {
            <div class="card border border-primary/30 bg-primary/10 text-center">
                <div class="card-body">
                    <h2 class="text-2xl text-secondary">
                        { i18n.t("home.welcome_back").replace("{name}", name) }
                    </h2>
                    <p class="text-base-content/70">{ i18n.t("home.welcome_back_body") }</p>
                </div>
            </div>
        }
    });

    html! {
        <div class="space-y-16 py-8">
            <section class="text-center space-y-4">
                <h1 class="text-5xl md:text-7xl font-bold bg-gradient-to-r from-white to-purple-300 bg-clip-text text-transparent">
                    { i18n.t("home.title") }
                </h1>
                <p class="text-2xl md:text-3xl font-light text-base-content/70">{ i18n.t("home.subtitle") }</p>
                <p class="mx-auto max-w-xl text-lg text-base-content/70">{ i18n.t("home.description") }</p>
                <div class="pt-4">{ call_to_action }</div>
                if let Some(message) = (*server_message).clone() {
                    <p class="text-xs text-base-content/50">
                        { i18n.t("home.server_status") }{" "}{ message }
                    </p>
                }
            </section>

            { welcome }

            <section>
                <h2 class="mb-6 text-center text-3xl font-bold">{ i18n.t("home.quick_actions") }</h2>
                <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
                    { for QUICK_ACTIONS.iter().map(|(key, icon, route)| html! {
                        <Link<MainRoute> to={*route} classes="card bg-base-200 shadow-xl transition hover:-translate-y-1 hover:shadow-2xl">
                            <div class="card-body items-center text-center">
                                <Icon icon_id={icon.clone()} class="w-8 h-8 text-primary" />
                                <h3 class="font-semibold">{ i18n.t(key) }</h3>
                            </div>
                        </Link<MainRoute>>
                    }) }
                </div>
            </section>

            <section>
                <div class="mb-8 text-center space-y-2">
                    <h2 class="text-3xl font-bold">{ i18n.t("home.features_title") }</h2>
                    <p class="text-base-content/70">{ i18n.t("home.features_subtitle") }</p>
                </div>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                    { for FEATURES.iter().map(|(key, icon)| html! {
                        <div class="card bg-base-200 shadow-xl">
                            <div class="card-body">
                                <h3 class="card-title">
                                    <Icon icon_id={icon.clone()} class="w-8 h-8 text-secondary" />
                                    { i18n.t(&format!("{key}.title")) }
                                </h3>
                                <p class="text-base-content/70">{ i18n.t(&format!("{key}.description")) }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="text-center space-y-4">
                <h2 class="text-3xl font-bold">{ i18n.t("home.closing_title") }</h2>
                <p class="mx-auto max-w-lg text-base-content/70">{ i18n.t("home.closing_body") }</p>
                <div class="flex flex-wrap justify-center gap-2">
                    { for CHIPS.iter().map(|key| html! {
                        <span class="badge badge-outline badge-secondary badge-lg">{ i18n.t(key) }</span>
                    }) }
                </div>
            </section>
        </div>
    }
}

use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ComingSoonPageProps {
    pub route: MainRoute,
}

/// Placeholder for navbar sections that are not built yet.
#[function_component(ComingSoonPage)]
pub fn coming_soon_page(props: &ComingSoonPageProps) -> Html {
    let (i18n, _) = use_translation();
    let section = props
        .route
        .nav_key()
        .map(|key| i18n.t(key))
        .unwrap_or_default();

    html! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <Icon icon_id={IconId::HeroiconsOutlineSparkles} class="mx-auto w-12 h-12 text-secondary" />
                    <h1 class="text-4xl font-bold">{ section }</h1>
                    <h2 class="text-xl">{ i18n.t("coming_soon.title") }</h2>
                    <p class="text-base-content/70">{ i18n.t("coming_soon.body") }</p>
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                        { i18n.t("coming_soon.back") }
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}

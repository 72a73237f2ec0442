use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-6xl font-bold">{ "404" }</h1>
                    <h2 class="text-2xl font-semibold">{ i18n.t("errors.not_found_title") }</h2>
                    <p class="text-base-content/70">{ i18n.t("errors.not_found_body") }</p>
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                        { i18n.t("errors.back_home") }
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}

use crate::containers::navbar::Navbar;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{Callback, Children, Html, Properties, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, _) = use_translation();

    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "dark")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
        <div class="flex min-h-screen flex-col flexify-gradient text-base-content">
            <Navbar current_route={props.current_route} on_logout={props.on_logout.clone()} />
            <main class="container mx-auto flex-grow px-4 py-6">
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300">
                <p>{ i18n.t("app.footer") }</p>
            </footer>
        </div>
    }
}

use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/workouts")]
    Workouts,
    #[at("/diet")]
    Diet,
    #[at("/chatbot")]
    Chatbot,
    #[at("/analytics")]
    Analytics,
    #[at("/profile")]
    Profile,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/auth/google/callback")]
    GoogleCallback,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Translation key prefix for routes shown in the navbar.
    pub fn nav_key(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("nav.home"),
            Self::Workouts => Some("nav.workouts"),
            Self::Diet => Some("nav.diet"),
            Self::Chatbot => Some("nav.chatbot"),
            Self::Analytics => Some("nav.analytics"),
            Self::Profile => Some("nav.profile"),
            Self::Login | Self::Signup | Self::GoogleCallback | Self::NotFound => None,
        }
    }

    /// Navbar links in display order.
    pub fn nav_links() -> Vec<Self> {
        Self::iter().filter(|route| route.nav_key().is_some()).collect()
    }

    /// Pages that make no sense once signed in.
    pub fn guest_only(self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// Pages rendered without the navbar.
    pub fn full_screen(self) -> bool {
        matches!(self, Self::Login | Self::Signup | Self::GoogleCallback)
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let authenticated = use_selector(|state: &AppState| state.authenticated);
    let route = props.route;

    if route.guest_only() && *authenticated {
        return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
    }

    let page = match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Chatbot => html! { <ChatbotPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Signup => html! { <SignupPage /> },
        MainRoute::GoogleCallback => html! { <GoogleCallbackPage /> },
        MainRoute::Workouts | MainRoute::Diet | MainRoute::Analytics | MainRoute::Profile => {
            html! { <ComingSoonPage {route} /> }
        }
        MainRoute::NotFound => html! { <ErrorPage /> },
    };

    if route.full_screen() {
        return page;
    }

    html! {
        <Layout current_route={route} on_logout={props.on_logout.clone()}>
            {page}
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log::debug!("switching to route {route:?}");
    html! { <MainRouteView {route} {on_logout} /> }
}

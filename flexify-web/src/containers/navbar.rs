use crate::{models::app_state::AppState, routes::MainRoute};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current_route: MainRoute,
    pub on_logout: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct LogoutDialogProps {
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
}

#[function_component(LogoutDialog)]
fn logout_dialog(props: &LogoutDialogProps) -> Html {
    let (i18n, _) = use_translation();
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3 class="text-lg font-bold">{ i18n.t("logout.title") }</h3>
                <p class="py-4">{ i18n.t("logout.body") }</p>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" onclick={on_cancel.clone()}>
                        { i18n.t("logout.cancel") }
                    </button>
                    <button type="button" class="btn btn-error" onclick={on_confirm}>
                        { i18n.t("logout.confirm") }
                    </button>
                </div>
            </div>
            <div class="modal-backdrop" onclick={on_cancel}></div>
        </div>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let (i18n, ..) = use_translation();
    let authenticated = use_selector(|state: &AppState| state.authenticated);
    let confirming = use_state(|| false);

    let render_links = || -> Html {
        html! {
            { for MainRoute::nav_links().into_iter().map(|route| {
                let active = (route == props.current_route).then_some("btn-active");
                let label = route.nav_key().map(|key| i18n.t(key)).unwrap_or_default();
                html! {
                    <li>
                        <Link<MainRoute> to={route} classes={classes!("btn", "btn-ghost", "btn-sm", active)}>
                            { label }
                        </Link<MainRoute>>
                    </li>
                }
            }) }
        }
    };

    let open_dialog = {
        let confirming = confirming.clone();
        Callback::from(move |_: MouseEvent| confirming.set(true))
    };
    let close_dialog = {
        let confirming = confirming.clone();
        Callback::from(move |()| confirming.set(false))
    };
    let confirm_logout = {
        let confirming = confirming.clone();
        let on_logout = props.on_logout.clone();
        Callback::from(move |()| {
            confirming.set(false);
            on_logout.emit(());
        })
    };

    let account_action = if *authenticated {
        html! {
            <button type="button" class="btn btn-outline btn-sm gap-2" onclick={open_dialog}>
                <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-4 h-4" />
                { i18n.t("nav.logout") }
            </button>
        }
    } else {
        html! {
            <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary btn-sm">
                { i18n.t("nav.login") }
            </Link<MainRoute>>
        }
    };

    html! {
        <>
            <nav class="navbar justify-between bg-base-300/80 backdrop-blur">
                <div class="flex items-center gap-2">
                    <div class="dropdown lg:hidden">
                        <button tabindex="0" class="btn btn-ghost btn-square" aria-label={i18n.t("nav.menu")}>
                            <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
                        </button>
                        <ul tabindex="0" class="dropdown-content menu z-[1] mt-3 w-56 gap-1 rounded-box bg-base-200 p-4 shadow">
                            { render_links() }
                        </ul>
                    </div>
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost gap-2 text-xl font-bold">
                        <Icon icon_id={IconId::HeroiconsOutlineBolt} class="w-6 h-6 text-secondary" />
                        { i18n.t("app.title") }
                    </Link<MainRoute>>
                </div>
                <ul class="hidden lg:flex menu menu-horizontal gap-1">
                    { render_links() }
                </ul>
                <div>{ account_action }</div>
            </nav>
            if *confirming {
                <LogoutDialog on_confirm={confirm_logout} on_cancel={close_dialog} />
            }
        </>
    }
}

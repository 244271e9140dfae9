use crate::auth::{use_auth, use_session_manager};
use crate::router::use_navigate;
use crate::services::use_navigator;
use inflow_core::{PageId, StandalonePage};
use yew::prelude::*;

const NAV_PAGES: [PageId; 5] = [
    PageId::Home,
    PageId::Features,
    PageId::Pricing,
    PageId::Faqs,
    PageId::Contact,
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: PageId,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let auth = use_auth();
    let manager = use_session_manager();
    let navigate = use_navigate();
    let navigator = use_navigator();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_sign_out = Callback::from(move |_: MouseEvent| {
        let manager = manager.clone();
        wasm_bindgen_futures::spawn_local(async move {
            manager.sign_out().await;
        });
    });

    let link = |page: PageId, extra: Option<&'static str>| {
        let navigate = navigate.clone();
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigate.emit(page);
        });
        let active = if props.current == page {
            "text-blue-600 font-semibold"
        } else {
            "text-gray-700 hover:text-blue-600"
        };
        html! {
            <a href={format!("#{}", page.to_hash())} class={classes!(active, extra)} {onclick}>
                {page.label()}
            </a>
        }
    };

    let open_standalone = |page: StandalonePage| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.assign(page.path()))
    };

    let account = if auth.user.is_some() {
        html! {
            <button
                class="px-4 py-2 rounded-lg bg-gray-900 text-white hover:bg-gray-700"
                onclick={on_sign_out}
                disabled={auth.is_loading}
            >
                {"Sign Out"}
            </button>
        }
    } else {
        html! {
            <>
                <button
                    class="px-4 py-2 rounded-lg text-gray-700 hover:text-blue-600"
                    onclick={open_standalone(StandalonePage::Login)}
                >
                    {"Login"}
                </button>
                <button
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700"
                    onclick={open_standalone(StandalonePage::Signup)}
                >
                    {"Sign Up"}
                </button>
            </>
        }
    };

    html! {
        <header class="sticky top-0 z-50 bg-white/90 backdrop-blur border-b border-gray-100">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <a href="#" class="text-2xl font-bold text-blue-600"
                    onclick={{
                        let navigate = navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            navigate.emit(PageId::Home);
                        })
                    }}
                >
                    {"Inflow"}
                </a>
                <nav class="hidden md:flex items-center gap-8">
                    {for NAV_PAGES.iter().map(|page| link(*page, None))}
                </nav>
                <div class="hidden md:flex items-center gap-3">{account.clone()}</div>
                <button
                    class="md:hidden p-2 text-gray-700"
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            if *menu_open {
                <div class="md:hidden border-t border-gray-100 px-6 py-4 flex flex-col gap-4">
                    {for NAV_PAGES.iter().map(|page| link(*page, Some("block")))}
                    <div class="flex gap-3 pt-2">{account}</div>
                </div>
            }
        </header>
    }
}

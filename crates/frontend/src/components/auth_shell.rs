use crate::browser;
use crate::config::AppConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthShellProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub children: Children,
}

/// Full-page frame for the login and sign-up views
#[function_component(AuthShell)]
pub fn auth_shell(props: &AuthShellProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-blue-50 to-indigo-100">
            <div class="px-6 py-5">
                <a href={AppConfig::LANDING_URL} class="text-2xl font-bold text-blue-600">{"Inflow"}</a>
            </div>
            <div class="flex-1 flex items-center justify-center px-6 py-10">
                <div class="w-full max-w-md bg-white rounded-2xl shadow-xl p-8">
                    <h1 class="text-3xl font-bold text-gray-900 text-center mb-2">{props.title.clone()}</h1>
                    <p class="text-gray-600 text-center mb-8">{props.subtitle.clone()}</p>
                    {props.children.clone()}
                </div>
            </div>
            <footer class="py-6 text-center text-sm text-gray-500">
                {"Copyright © 2025 Inflow Enterprises LTD. "}
                <a
                    href={AppConfig::PRIVACY_URL}
                    class="underline hover:text-gray-700"
                    onclick={Callback::from(|e: MouseEvent| {
                        e.prevent_default();
                        browser::open_in_new_tab(AppConfig::PRIVACY_URL);
                    })}
                >
                    {"Privacy Policy"}
                </a>
            </footer>
        </div>
    }
}

use super::login::{checkbox_value, input_value, use_auth_gate};
use crate::auth::use_session_manager;
use crate::browser;
use crate::components::{AuthShell, GoogleButton};
use crate::config::AppConfig;
use crate::services::use_navigator;
use inflow_core::forms::SIGNUP_SUCCESS;
use inflow_core::{SignupDraft, StandalonePage};
use tracing::{error, info};
use yew::prelude::*;

#[derive(Clone, Copy)]
enum Field {
    Username,
    Email,
    Password,
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let manager = use_session_manager();
    let navigator = use_navigator();
    let gate = use_auth_gate();
    let draft = use_state(SignupDraft::default);
    let error_text = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    if let Some(placeholder) = gate.placeholder() {
        return placeholder;
    }

    let on_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            let value = input_value(&e);
            match field {
                Field::Username => next.username = value,
                Field::Email => next.email = value,
                Field::Password => next.password = value,
            }
            draft.set(next);
        })
    };
    let on_agree = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            draft.set(SignupDraft {
                agree_to_privacy: checkbox_value(&e),
                ..(*draft).clone()
            });
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let error_text = error_text.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let manager = manager.clone();
            let navigator = navigator.clone();
            let draft = (*draft).clone();
            let error_text = error_text.clone();
            let submitting = submitting.clone();
            error_text.set(None);
            // Local checks fail before anything is in flight
            if let Err(e) = draft.validate() {
                error_text.set(Some(e.user_message()));
                return;
            }
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match draft.submit(&manager).await {
                    Ok(user) => {
                        info!(signed_in = user.is_some(), "Account created");
                        browser::alert(SIGNUP_SUCCESS);
                        navigator.assign(StandalonePage::Login.path());
                    }
                    Err(e) => {
                        error!(error = %e, "Sign-up failed");
                        error_text.set(Some(e.user_message()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_google_error = {
        let error_text = error_text.clone();
        Callback::from(move |message: String| error_text.set(Some(message)))
    };

    let open_privacy = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        browser::open_in_new_tab(AppConfig::PRIVACY_URL);
    });

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    html! {
        <AuthShell title="Create Account" subtitle="Join Inflow and start organizing your business today.">
            if let Some(message) = (*error_text).clone() {
                <div class="mb-6 p-4 rounded-lg bg-red-50 border border-red-200 text-red-700 text-sm">{message}</div>
            }
            <form class="space-y-6" {onsubmit}>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2" for="signup-username">{"Username"}</label>
                    <input id="signup-username" type="text" class={input_class}
                        placeholder="Choose a username"
                        value={draft.username.clone()}
                        oninput={on_input(Field::Username)} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2" for="signup-email">{"Email"}</label>
                    <input id="signup-email" type="email" required=true class={input_class}
                        placeholder="Enter your email"
                        value={draft.email.clone()}
                        oninput={on_input(Field::Email)} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2" for="signup-password">{"Password"}</label>
                    <input id="signup-password" type="password" required=true class={input_class}
                        placeholder="Create a password"
                        value={draft.password.clone()}
                        oninput={on_input(Field::Password)} />
                </div>
                <label class="flex items-start gap-2 text-sm text-gray-700">
                    <input type="checkbox" class="mt-1" checked={draft.agree_to_privacy} onchange={on_agree} />
                    <span>
                        {"I agree to the "}
                        <a href={AppConfig::PRIVACY_URL} class="text-blue-600 hover:underline" onclick={open_privacy}>
                            {"Privacy Policy"}
                        </a>
                    </span>
                </label>
                <button type="submit" disabled={*submitting}
                    class="w-full py-3 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700 disabled:opacity-50"
                >
                    {if *submitting { "Please wait..." } else { "Create Account" }}
                </button>
            </form>
            <div class="flex items-center my-6 text-sm text-gray-500">
                <div class="flex-1 border-t border-gray-200"></div>
                <span class="px-3">{"Or Sign Up With"}</span>
                <div class="flex-1 border-t border-gray-200"></div>
            </div>
            <GoogleButton label="Google" disabled={*submitting} on_error={on_google_error} />
            <p class="mt-8 text-center text-sm text-gray-600">
                {"Already have an account? "}
                <a href={StandalonePage::Login.path()} class="text-blue-600 font-semibold hover:underline">{"Log In"}</a>
            </p>
        </AuthShell>
    }
}

use crate::auth::{use_auth, use_session_manager};
use crate::components::{AuthShell, GoogleButton, SessionPending};
use crate::config::AppConfig;
use crate::services::use_navigator;
use inflow_core::{LoginDraft, StandalonePage};
use tracing::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Input value of the event target
pub(super) fn input_value(e: &InputEvent) -> String {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub(super) fn checkbox_value(e: &Event) -> bool {
    e.target_dyn_into::<HtmlInputElement>()
        .is_some_and(|input| input.checked())
}

/// What a standalone auth page shows for the current session state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Gate {
    /// Session state not settled yet
    Pending,
    /// A session exists; leaving for the landing page
    Redirect,
    Form,
}

impl Gate {
    fn new(signed_in: bool, loading: bool) -> Self {
        if signed_in {
            Self::Redirect
        } else if loading {
            Self::Pending
        } else {
            Self::Form
        }
    }

    /// Shown in place of the form, if the form must stay hidden
    pub(super) fn placeholder(self) -> Option<Html> {
        match self {
            Self::Pending => Some(html! { <SessionPending message="Checking your session..." /> }),
            Self::Redirect => Some(html! { <SessionPending message="Redirecting..." /> }),
            Self::Form => None,
        }
    }
}

/// Leave for the landing page once a session exists
#[hook]
pub(super) fn use_auth_gate() -> Gate {
    let auth = use_auth();
    let navigator = use_navigator();
    let gate = Gate::new(auth.user.is_some(), auth.is_loading);
    use_effect_with(gate, move |gate| {
        if *gate == Gate::Redirect {
            navigator.assign(AppConfig::LANDING_URL);
        }
    });
    gate
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let manager = use_session_manager();
    let navigator = use_navigator();
    let gate = use_auth_gate();
    let draft = use_state(LoginDraft::default);
    let show_password = use_state(|| false);
    let error_text = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    if let Some(placeholder) = gate.placeholder() {
        return placeholder;
    }

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            draft.set(LoginDraft {
                email: input_value(&e),
                ..(*draft).clone()
            });
        })
    };
    let on_password = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            draft.set(LoginDraft {
                password: input_value(&e),
                ..(*draft).clone()
            });
        })
    };
    let on_remember = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            draft.set(LoginDraft {
                remember_me: checkbox_value(&e),
                ..(*draft).clone()
            });
        })
    };
    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
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
            submitting.set(true);
            error_text.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match draft.submit(&manager).await {
                    Ok(_) => navigator.assign(AppConfig::LANDING_URL),
                    Err(e) => {
                        error!(error = %e, "Login failed");
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

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    html! {
        <AuthShell title="Welcome Back" subtitle="Enter your email and password to access your account.">
            if let Some(message) = (*error_text).clone() {
                <div class="mb-6 p-4 rounded-lg bg-red-50 border border-red-200 text-red-700 text-sm">{message}</div>
            }
            <form class="space-y-6" {onsubmit}>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2" for="login-email">{"Email"}</label>
                    <input id="login-email" type="email" required=true class={input_class}
                        placeholder="Enter your email"
                        value={draft.email.clone()}
                        oninput={on_email} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2" for="login-password">{"Password"}</label>
                    <div class="relative">
                        <input id="login-password" required=true class={input_class}
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Enter your password"
                            value={draft.password.clone()}
                            oninput={on_password} />
                        <button type="button" class="absolute right-3 top-3 text-sm text-gray-500"
                            onclick={toggle_password}
                        >
                            {if *show_password { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </div>
                <label class="flex items-center gap-2 text-sm text-gray-700">
                    <input type="checkbox" checked={draft.remember_me} onchange={on_remember} />
                    {"Remember Me"}
                </label>
                <button type="submit" disabled={*submitting}
                    class="w-full py-3 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700 disabled:opacity-50"
                >
                    {if *submitting { "Please wait..." } else { "Log In" }}
                </button>
            </form>
            <div class="flex items-center my-6 text-sm text-gray-500">
                <div class="flex-1 border-t border-gray-200"></div>
                <span class="px-3">{"Or Login With"}</span>
                <div class="flex-1 border-t border-gray-200"></div>
            </div>
            <GoogleButton label="Google" disabled={*submitting} on_error={on_google_error} />
            <p class="mt-8 text-center text-sm text-gray-600">
                {"Don't have an account? "}
                <a href={StandalonePage::Signup.path()} class="text-blue-600 font-semibold hover:underline">{"Sign Up"}</a>
            </p>
        </AuthShell>
    }
}

use crate::auth::use_session_manager;
use tracing::error;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GoogleButtonProps {
    #[prop_or(AttrValue::Static("Continue with Google"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    /// Receives the user-facing message when the redirect cannot start
    pub on_error: Callback<String>,
}

/// Starts the Google OAuth redirect
#[function_component(GoogleButton)]
pub fn google_button(props: &GoogleButtonProps) -> Html {
    let manager = use_session_manager();

    let onclick = {
        let on_error = props.on_error.clone();
        Callback::from(move |_: MouseEvent| {
            let manager = manager.clone();
            let on_error = on_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = manager.sign_in_with_google().await {
                    error!(error = %e, "Google sign-in failed");
                    on_error.emit(e.user_message());
                }
            });
        })
    };

    html! {
        <button
            type="button"
            class="w-full flex items-center justify-center gap-3 py-3 border border-gray-300 rounded-lg bg-white text-gray-700 hover:bg-gray-50 disabled:opacity-50"
            disabled={props.disabled}
            {onclick}
        >
            <span class="font-bold text-blue-600">{"G"}</span>
            {props.label.clone()}
        </button>
    }
}

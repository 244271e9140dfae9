//! Placeholder for the standalone auth pages while the session settles

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SessionPendingProps {
    pub message: AttrValue,
}

/// Full-height status panel in the auth page palette
///
/// Announced politely to assistive technology; the ring is decorative.
#[function_component(SessionPending)]
pub fn session_pending(props: &SessionPendingProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100 px-6">
            <div role="status" aria-live="polite" class="flex flex-col items-center gap-4 bg-white rounded-2xl shadow-lg px-10 py-8">
                <span aria-hidden="true" class="h-12 w-12 rounded-full border-4 border-indigo-100 border-b-indigo-600 animate-spin"></span>
                <span class="text-sm font-medium text-indigo-900">{props.message.clone()}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::utils::document;
    use std::time::Duration;
    use wasm_bindgen_test::*;
    use yew::platform::time::sleep;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn announces_message() {
        let root = document().create_element("div").expect("root");
        document().body().expect("body").append_child(&root).expect("attach");
        yew::Renderer::<SessionPending>::with_root_and_props(
            root.clone(),
            SessionPendingProps {
                message: "Redirecting...".into(),
            },
        )
        .render();
        sleep(Duration::from_millis(0)).await;

        let status = root
            .query_selector("[role=status]")
            .expect("query")
            .expect("status element");
        assert_eq!(status.text_content().as_deref(), Some("Redirecting..."));
    }
}

//! Hash-fragment page routing for the main shell

use crate::browser;
use gloo::events::EventListener;
use gloo::utils::window;
use inflow_core::routing::NAVIGATE_EVENT;
use inflow_core::{Navigation, PageId, PageRouter};
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::CustomEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouterState {
    router: PageRouter,
}

impl RouterState {
    pub fn from_location() -> Self {
        Self {
            router: PageRouter::from_hash(&browser::current_hash()),
        }
    }

    pub fn current(&self) -> PageId {
        self.router.current()
    }
}

pub enum RouterAction {
    /// Back/forward changed the fragment
    HistoryChanged(String),
    /// A view broadcast a navigation request
    NavigateEvent(String),
    /// A header or footer link was followed
    Navigate(PageId),
}

fn apply(navigation: &Navigation) {
    if let Some(hash) = navigation.set_hash {
        browser::set_hash(hash);
    }
    if navigation.scroll_to_top {
        browser::scroll_to_top();
    }
}

impl Reducible for RouterState {
    type Action = RouterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut router = self.router;
        let navigation = match action {
            RouterAction::HistoryChanged(hash) => router.on_history_change(&hash),
            RouterAction::NavigateEvent(detail) => router.on_navigate_event(&detail),
            RouterAction::Navigate(page) => router.navigate(page),
        };
        debug!(page = %navigation.page, "Page selected");
        apply(&navigation);

        if router == self.router {
            self
        } else {
            Rc::new(Self { router })
        }
    }
}

pub type RouterContext = UseReducerHandle<RouterState>;

/// Router state wired to `popstate` and the navigation event
#[hook]
pub fn use_page_router() -> RouterContext {
    let state = use_reducer(RouterState::from_location);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let history = {
                let state = state.clone();
                EventListener::new(&window(), "popstate", move |_| {
                    state.dispatch(RouterAction::HistoryChanged(browser::current_hash()));
                })
            };
            let navigate = EventListener::new(&window(), NAVIGATE_EVENT, move |event| {
                let detail = event
                    .dyn_ref::<CustomEvent>()
                    .and_then(|event| event.detail().as_string())
                    .unwrap_or_default();
                state.dispatch(RouterAction::NavigateEvent(detail));
            });

            // Listeners are removed when dropped
            move || drop((history, navigate))
        });
    }

    state
}

/// Navigate within the shell
#[hook]
pub fn use_navigate() -> Callback<PageId> {
    let router = use_context::<RouterContext>()
        .expect("RouterContext not found. Make sure the page is rendered inside the site shell");
    Callback::from(move |page| router.dispatch(RouterAction::Navigate(page)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn navigate_writes_fragment() {
        let state = Rc::new(RouterState {
            router: PageRouter::default(),
        });
        let next = state.reduce(RouterAction::Navigate(PageId::Pricing));
        assert_eq!(next.current(), PageId::Pricing);
        assert_eq!(browser::current_hash(), "#pricing");

        let home = next.reduce(RouterAction::Navigate(PageId::Home));
        assert_eq!(home.current(), PageId::Home);
        assert_eq!(browser::current_hash(), "");
    }

    #[wasm_bindgen_test]
    fn unknown_event_detail_selects_home() {
        let state = Rc::new(RouterState {
            router: PageRouter::new(PageId::Faqs),
        });
        let next = state.reduce(RouterAction::NavigateEvent("nowhere".into()));
        assert_eq!(next.current(), PageId::Home);
    }

    #[wasm_bindgen_test]
    fn unchanged_page_keeps_state() {
        let state = Rc::new(RouterState {
            router: PageRouter::new(PageId::About),
        });
        let next = state.clone().reduce(RouterAction::HistoryChanged("#about".into()));
        assert!(Rc::ptr_eq(&state, &next));
    }
}

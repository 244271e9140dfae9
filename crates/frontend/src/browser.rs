//! Browser implementations of the session layer's host traits

use gloo::utils::{document, window};
use inflow_core::routing::NAVIGATE_EVENT;
use inflow_core::{CookieJar, KeyValueStore, LocalTask, Navigator, PageId, Spawner, StorageError};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CustomEvent, CustomEventInit, HtmlDocument, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions, Storage,
};

fn js_error(err: &JsValue) -> StorageError {
    StorageError::Operation(format!("{err:?}"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StorageArea {
    Local,
    Session,
}

/// `localStorage` or `sessionStorage`
#[derive(Debug)]
pub struct WebStorage {
    area: StorageArea,
}

impl WebStorage {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        let storage = match self.area {
            StorageArea::Local => window().local_storage(),
            StorageArea::Session => window().session_storage(),
        };
        storage
            .map_err(|e| js_error(&e))?
            .ok_or_else(|| StorageError::Unavailable(format!("{:?} storage", self.area)))
    }
}

impl KeyValueStore for WebStorage {
    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let storage = self.storage()?;
        let len = storage.length().map_err(|e| js_error(&e))?;
        // Collected up front; removal while indexing would shift the keys
        Ok((0..len)
            .filter_map(|index| storage.key(index).ok().flatten())
            .collect())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| js_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| js_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(|e| js_error(&e))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage()?.clear().map_err(|e| js_error(&e))
    }
}

/// `document.cookie`
#[derive(Debug, Default)]
pub struct DocumentCookies;

impl DocumentCookies {
    fn document() -> Result<HtmlDocument, StorageError> {
        document()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| StorageError::Unavailable("cookies".into()))
    }
}

impl CookieJar for DocumentCookies {
    fn names(&self) -> Result<Vec<String>, StorageError> {
        let cookies = Self::document()?.cookie().map_err(|e| js_error(&e))?;
        Ok(cookies
            .split(';')
            .filter_map(|pair| pair.split('=').next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn expire(&self, name: &str) -> Result<(), StorageError> {
        let document = Self::document()?;
        let hostname = window().location().hostname().unwrap_or_default();
        let expired = format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 UTC");
        document
            .set_cookie(&format!("{expired}; path=/"))
            .map_err(|e| js_error(&e))?;
        document
            .set_cookie(&format!("{expired}; path=/; domain={hostname}"))
            .map_err(|e| js_error(&e))
    }
}

/// `window.location`
#[derive(Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn origin(&self) -> String {
        window().location().origin().unwrap_or_default()
    }

    fn pathname(&self) -> String {
        current_pathname()
    }

    fn hash(&self) -> String {
        current_hash()
    }

    fn assign(&self, url: &str) {
        assign(url);
    }

    fn replace(&self, url: &str) {
        if let Err(e) = window().location().replace(url) {
            warn!(url = %url, error = ?e, "Failed to replace location");
        }
    }

    fn set_hash(&self, hash: &str) {
        set_hash(hash);
    }
}

/// Runs tasks on the browser's microtask queue
#[derive(Debug, Default)]
pub struct WasmSpawner;

impl Spawner for WasmSpawner {
    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

pub fn current_pathname() -> String {
    window().location().pathname().unwrap_or_default()
}

/// Fragment including the leading `#`, or empty
pub fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

pub fn assign(url: &str) {
    if let Err(e) = window().location().assign(url) {
        warn!(url = %url, error = ?e, "Failed to navigate");
    }
}

pub fn set_hash(hash: &str) {
    if let Err(e) = window().location().set_hash(hash) {
        warn!(hash = %hash, error = ?e, "Failed to update fragment");
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Err(e) = window().open_with_url_and_target(url, "_blank") {
        warn!(url = %url, error = ?e, "Failed to open window");
    }
}

/// Drop the fragment without adding a history entry or reloading
pub fn strip_fragment() {
    let location = window().location();
    let url = format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default()
    );
    if let Ok(history) = window().history()
        && let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
    {
        warn!(error = ?e, "Failed to strip fragment");
    }
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_element(id: &str) {
    match document().get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!(id = %id, "Scroll target not found"),
    }
}

/// Ask whichever router is listening to show `page`
pub fn dispatch_navigate_event(page: PageId) {
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from_str(page.as_str()));
    match CustomEvent::new_with_event_init_dict(NAVIGATE_EVENT, &init) {
        Ok(event) => {
            if let Err(e) = window().dispatch_event(&event) {
                warn!(page = %page, error = ?e, "Failed to dispatch navigation");
            }
        }
        Err(e) => warn!(error = ?e, "Failed to create navigation event"),
    }
}

pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn web_storage_round_trip() {
        let store = WebStorage::session();
        store.clear().unwrap();
        store.set("sb-test-auth-token", "{}").unwrap();
        store.set("theme", "light").unwrap();

        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["sb-test-auth-token", "theme"]);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
        store.clear().unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[wasm_bindgen_test]
    fn expired_cookie_disappears() {
        let cookies = DocumentCookies;
        DocumentCookies::document()
            .unwrap()
            .set_cookie("inflow-auth-test=1; path=/")
            .unwrap();
        assert!(cookies.names().unwrap().contains(&"inflow-auth-test".to_string()));

        cookies.expire("inflow-auth-test").unwrap();
        assert!(!cookies.names().unwrap().contains(&"inflow-auth-test".to_string()));
    }
}

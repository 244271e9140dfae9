//! Browser-persisted state: key-value stores, cookies, and the auth purge
//!
//! Sign-out removes every locally persisted key or cookie whose name
//! contains one of the configured markers (a substring match, not an
//! exact key list) and clears session-scoped storage entirely.

use crate::error::StorageError;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use tracing::{debug, warn};

/// A string key-value store such as `localStorage` or `sessionStorage`
pub trait KeyValueStore {
    fn keys(&self) -> Result<Vec<String>, StorageError>;
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Cookies visible to the current document
pub trait CookieJar {
    fn names(&self) -> Result<Vec<String>, StorageError>;

    /// Expire a cookie for the current domain and for the root path
    fn expire(&self, name: &str) -> Result<(), StorageError>;
}

/// How much a purge touches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurgeScope {
    /// Marker-named persistent keys and all session-scoped keys
    Storage,
    /// [`PurgeScope::Storage`] plus marker-named cookies
    Everything,
}

/// What a purge actually removed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PurgeReport {
    pub local_removed: Vec<String>,
    pub session_cleared: bool,
    pub cookies_expired: Vec<String>,
    pub failures: usize,
}

/// Whether a key or cookie name carries any of the markers
pub fn matches_marker(name: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| name.contains(marker.as_str()))
}

/// The three browser stores the session layer may clean up
#[derive(Clone)]
pub struct ClientStorage {
    pub local: Rc<dyn KeyValueStore>,
    pub session: Rc<dyn KeyValueStore>,
    pub cookies: Rc<dyn CookieJar>,
}

impl ClientStorage {
    pub fn new(
        local: Rc<dyn KeyValueStore>,
        session: Rc<dyn KeyValueStore>,
        cookies: Rc<dyn CookieJar>,
    ) -> Self {
        Self {
            local,
            session,
            cookies,
        }
    }

    /// Best-effort removal of auth-related client state; never fails
    pub fn purge(&self, markers: &[String], scope: PurgeScope) -> PurgeReport {
        let mut report = PurgeReport::default();

        match self.local.keys() {
            Ok(keys) => {
                for key in keys.into_iter().filter(|k| matches_marker(k, markers)) {
                    match self.local.remove(&key) {
                        Ok(()) => report.local_removed.push(key),
                        Err(e) => {
                            warn!(key = %key, error = %e, "Failed to remove persisted key");
                            report.failures += 1;
                        }
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to enumerate persistent storage");
                report.failures += 1;
            }
        }

        match self.session.clear() {
            Ok(()) => report.session_cleared = true,
            Err(e) => {
                warn!(error = %e, "Failed to clear session storage");
                report.failures += 1;
            }
        }

        if scope == PurgeScope::Everything {
            match self.cookies.names() {
                Ok(names) => {
                    for name in names.into_iter().filter(|n| matches_marker(n, markers)) {
                        match self.cookies.expire(&name) {
                            Ok(()) => report.cookies_expired.push(name),
                            Err(e) => {
                                warn!(cookie = %name, error = %e, "Failed to expire cookie");
                                report.failures += 1;
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read cookies");
                    report.failures += 1;
                }
            }
        }

        debug!(
            local_removed = report.local_removed.len(),
            cookies_expired = report.cookies_expired.len(),
            failures = report.failures,
            "Purged client auth state"
        );
        report
    }
}

/// In-process [`KeyValueStore`], also used when browser storage is disabled
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into())),
        );
        store
    }

    /// Make every subsequent operation fail, as a disabled browser store does
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable.get() {
            Err(StorageError::Unavailable("storage disabled".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.check()?;
        Ok(self.entries.borrow().keys().cloned().collect())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.check()?;
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// In-process [`CookieJar`]
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    names: RefCell<BTreeSet<String>>,
}

impl MemoryCookieJar {
    pub fn with_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: RefCell::new(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.borrow().contains(name)
    }
}

impl CookieJar for MemoryCookieJar {
    fn names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.names.borrow().iter().cloned().collect())
    }

    fn expire(&self, name: &str) -> Result<(), StorageError> {
        self.names.borrow_mut().remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<String> {
        vec!["supabase".to_string(), "auth".to_string()]
    }

    fn fixture() -> (Rc<MemoryStore>, Rc<MemoryStore>, Rc<MemoryCookieJar>, ClientStorage) {
        let local = Rc::new(MemoryStore::with_entries([
            ("sb-abc-auth-token", "{}"),
            ("supabase.session", "x"),
            ("theme", "\"Dark\""),
            ("author_draft", "x"),
        ]));
        let session = Rc::new(MemoryStore::with_entries([("scratch", "1")]));
        let cookies = Rc::new(MemoryCookieJar::with_names(["sb-auth", "tracking"]));
        let storage = ClientStorage::new(local.clone(), session.clone(), cookies.clone());
        (local, session, cookies, storage)
    }

    #[test]
    fn full_purge_removes_marker_keys_and_cookies() {
        let (local, session, cookies, storage) = fixture();

        let report = storage.purge(&markers(), PurgeScope::Everything);

        assert_eq!(local.keys().unwrap(), vec!["theme".to_string()]);
        assert!(session.is_empty());
        assert!(!cookies.contains("sb-auth"));
        assert!(cookies.contains("tracking"));
        assert_eq!(report.local_removed.len(), 3);
        assert_eq!(report.cookies_expired, vec!["sb-auth".to_string()]);
        assert_eq!(report.failures, 0);
    }

    #[test]
    fn storage_scope_leaves_cookies() {
        let (_, _, cookies, storage) = fixture();
        let report = storage.purge(&markers(), PurgeScope::Storage);
        assert!(cookies.contains("sb-auth"));
        assert!(report.cookies_expired.is_empty());
        assert!(report.session_cleared);
    }

    #[test]
    fn disabled_storage_is_absorbed() {
        let (local, session, cookies, storage) = fixture();
        local.set_unavailable(true);
        session.set_unavailable(true);

        let report = storage.purge(&markers(), PurgeScope::Everything);

        assert_eq!(report.failures, 2);
        assert!(!report.session_cleared);
        // cookies are still handled
        assert!(!cookies.contains("sb-auth"));
    }

    #[test]
    fn marker_match_is_substring() {
        let m = markers();
        assert!(matches_marker("my-auth-key", &m));
        assert!(matches_marker("supabase", &m));
        assert!(!matches_marker("Auth", &m));
        assert!(!matches_marker("theme", &m));
    }
}

//! Persisted provider session

use inflow_core::{KeyValueStore, ProviderError, ProviderSession};
use std::rc::Rc;
use tracing::warn;
use url::Url;

/// Storage key for a project: `sb-<project-ref>-auth-token`
///
/// The project ref is the first label of the provider host.
pub fn storage_key_for(base_url: &str) -> Result<String, ProviderError> {
    let url = Url::parse(base_url).map_err(|e| ProviderError::Configuration(e.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| ProviderError::Configuration(format!("{base_url} has no host")))?;
    let project_ref = host.split('.').next().unwrap_or(host);
    Ok(format!("sb-{project_ref}-auth-token"))
}

/// Reads and writes the current session as JSON under one key
#[derive(Clone)]
pub struct SessionStore {
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl SessionStore {
    pub fn new(store: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The saved session; unreadable entries are dropped and treated as absent
    pub fn load(&self) -> Result<Option<ProviderSession>, ProviderError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable session");
                self.store.remove(&self.key)?;
                Ok(None)
            }
        }
    }

    pub fn save(&self, session: &ProviderSession) -> Result<(), ProviderError> {
        let raw =
            serde_json::to_string(session).map_err(|e| ProviderError::Decode(e.to_string()))?;
        self.store.set(&self.key, &raw)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), ProviderError> {
        self.store.remove(&self.key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inflow_core::storage::MemoryStore;
    use inflow_core::tests::session_for;

    #[test]
    fn key_uses_project_ref() {
        assert_eq!(
            storage_key_for("https://abcdefgh.supabase.co").unwrap(),
            "sb-abcdefgh-auth-token"
        );
        assert_eq!(
            storage_key_for("http://localhost:54321").unwrap(),
            "sb-localhost-auth-token"
        );
        assert!(storage_key_for("not a url").is_err());
    }

    #[test]
    fn save_load_clear() {
        let backing = Rc::new(MemoryStore::new());
        let store = SessionStore::new(backing.clone(), "sb-test-auth-token");
        assert_eq!(store.load().unwrap(), None);

        let session = session_for("u-1", "jane@x.com");
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert!(backing.is_empty());
    }

    #[test]
    fn corrupt_entry_is_discarded() {
        let backing = Rc::new(MemoryStore::with_entries([("sb-test-auth-token", "{not json")]));
        let store = SessionStore::new(backing.clone(), "sb-test-auth-token");

        assert_eq!(store.load().unwrap(), None);
        assert!(backing.is_empty());
    }
}

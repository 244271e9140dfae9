//! Startup handling for OAuth and email-link redirects

use crate::provider::HostedIdentityProvider;
use inflow_core::{ProviderError, ProviderSession, SessionManager};
use std::rc::Rc;
use tracing::{debug, info};

/// Whether `fragment` carries redirect tokens or a redirect error
pub fn is_redirect_fragment(fragment: &str) -> bool {
    fragment.contains("access_token=") || fragment.contains("error_description=")
}

/// Start `manager`, then consume any redirect material in `fragment`
///
/// The manager subscribes to `provider` before the fragment is read, so the
/// resulting `SignedIn` reaches it like any other sign-in (including the
/// profile upsert). Returns `Ok(None)` when the fragment is not a redirect.
pub async fn start_session(
    manager: &Rc<SessionManager>,
    provider: &HostedIdentityProvider,
    fragment: &str,
) -> Result<Option<ProviderSession>, ProviderError> {
    manager.initialize().await;

    if !is_redirect_fragment(fragment) {
        debug!("No redirect to complete");
        return Ok(None);
    }

    let session = provider.detect_session_in_url(fragment).await?;
    if let Some(session) = &session {
        info!(user_id = %session.user.id, "Signed in from redirect");
    }
    Ok(session)
}

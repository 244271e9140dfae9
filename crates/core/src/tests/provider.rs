//! Scripted identity provider for exercising the session manager

use crate::error::ProviderError;
use crate::identity::{
    AuthChangeEvent, ChangeListener, IdentityProvider, OAuthRequest, ProviderSession,
    SignUpRequest, Subscription, UpsertRequest,
};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listeners = Rc<RefCell<Vec<(u64, ChangeListener)>>>;

/// In-process [`IdentityProvider`] that records calls and emits scripted notifications
///
/// Successful sign-in and sign-out emit the same notifications a hosted
/// provider would.
#[derive(Default)]
pub struct ScriptedProvider {
    session: RefCell<Option<ProviderSession>>,
    get_session_error: RefCell<Option<ProviderError>>,
    during_get_session: RefCell<Vec<(AuthChangeEvent, Option<ProviderSession>)>>,
    sign_up_session: RefCell<Option<ProviderSession>>,
    sign_out_error: RefCell<Option<ProviderError>>,
    sign_out_gate: RefCell<Option<oneshot::Receiver<()>>>,
    upsert_error: RefCell<Option<ProviderError>>,
    listeners: Listeners,
    next_listener: Cell<u64>,
    sign_out_calls: Cell<usize>,
    sign_ups: RefCell<Vec<SignUpRequest>>,
    oauth_requests: RefCell<Vec<OAuthRequest>>,
    upserts: RefCell<Vec<UpsertRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_session(&self, session: Option<ProviderSession>) {
        *self.session.borrow_mut() = session;
    }

    pub fn fail_get_session(&self, error: ProviderError) {
        *self.get_session_error.borrow_mut() = Some(error);
    }

    /// Deliver a notification while the initial session lookup is in flight
    pub fn emit_during_get_session(&self, event: AuthChangeEvent, session: Option<ProviderSession>) {
        self.during_get_session.borrow_mut().push((event, session));
    }

    /// Make sign-up return a session, as when verification is disabled
    pub fn skip_verification(&self, session: ProviderSession) {
        *self.sign_up_session.borrow_mut() = Some(session);
    }

    pub fn fail_sign_out(&self, error: ProviderError) {
        *self.sign_out_error.borrow_mut() = Some(error);
    }

    /// Suspend the next sign-out until the returned sender fires
    pub fn hold_sign_out(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.sign_out_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn fail_upsert(&self, error: ProviderError) {
        *self.upsert_error.borrow_mut() = Some(error);
    }

    /// Push a notification to every registered listener
    pub fn emit(&self, event: AuthChangeEvent, session: Option<ProviderSession>) {
        let listeners: Vec<ChangeListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(event, session.clone());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.get()
    }

    pub fn sign_ups(&self) -> Vec<SignUpRequest> {
        self.sign_ups.borrow().clone()
    }

    pub fn oauth_requests(&self) -> Vec<OAuthRequest> {
        self.oauth_requests.borrow().clone()
    }

    pub fn upserts(&self) -> Vec<UpsertRequest> {
        self.upserts.borrow().clone()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for ScriptedProvider {
    async fn get_session(&self) -> Result<Option<ProviderSession>, ProviderError> {
        let pending: Vec<_> = self.during_get_session.borrow_mut().drain(..).collect();
        for (event, session) in pending {
            self.emit(event, session);
        }
        if let Some(error) = self.get_session_error.borrow_mut().take() {
            return Err(error);
        }
        Ok(self.session.borrow().clone())
    }

    fn on_session_change(&self, listener: ChangeListener) -> Subscription {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));

        let listeners = self.listeners.clone();
        Subscription::new(move || {
            listeners.borrow_mut().retain(|(existing, _)| *existing != id);
        })
    }

    async fn sign_up(
        &self,
        request: SignUpRequest,
    ) -> Result<Option<ProviderSession>, ProviderError> {
        self.sign_ups.borrow_mut().push(request);
        let session = self.sign_up_session.borrow().clone();
        if let Some(session) = &session {
            self.emit(AuthChangeEvent::SignedIn, Some(session.clone()));
        }
        Ok(session)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<ProviderSession, ProviderError> {
        let session = super::session_for("u-1", email);
        self.set_session(Some(session.clone()));
        self.emit(AuthChangeEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        let gate = self.sign_out_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(error) = self.sign_out_error.borrow_mut().take() {
            return Err(error);
        }
        self.set_session(None);
        self.emit(AuthChangeEvent::SignedOut, None);
        Ok(())
    }

    async fn sign_in_with_oauth(&self, request: OAuthRequest) -> Result<String, ProviderError> {
        let url = format!(
            "https://provider.test/authorize?provider={}",
            request.provider.as_str()
        );
        self.oauth_requests.borrow_mut().push(request);
        Ok(url)
    }

    async fn upsert(&self, request: UpsertRequest) -> Result<(), ProviderError> {
        self.upserts.borrow_mut().push(request);
        match self.upsert_error.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

//! Global authentication context and provider

use inflow_core::{AuthPhase, AuthSnapshot, SessionManager, User};
use std::rc::Rc;
use yew::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthContextData {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true, // Until the session manager settles
        }
    }
}

/// Authentication context actions
pub enum AuthAction {
    Snapshot(AuthSnapshot),
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Snapshot(snapshot) => {
                let next = Self {
                    user: snapshot.user,
                    is_loading: snapshot.loading,
                };
                if next == *self { self } else { Rc::new(next) }
            }
        }
    }
}

/// The session manager, compared by identity
#[derive(Clone)]
pub struct SessionHandle(pub Rc<SessionManager>);

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub session: SessionHandle,
    pub children: Children,
}

/// Mirrors the session manager into component state and starts it
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    {
        let auth_state = auth_state.clone();
        use_effect_with(props.session.clone(), move |session| {
            let manager = session.0.clone();
            let observer = {
                let auth_state = auth_state.clone();
                manager.subscribe(Rc::new(move |snapshot: &AuthSnapshot| {
                    auth_state.dispatch(AuthAction::Snapshot(snapshot.clone()));
                }))
            };
            // Catch up if the manager settled before this provider mounted
            if manager.phase() != AuthPhase::Uninitialized {
                auth_state.dispatch(AuthAction::Snapshot(manager.snapshot()));
            }

            {
                let manager = manager.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    manager.initialize().await;
                });
            }

            // Cleanup on unmount
            move || manager.unsubscribe(observer)
        });
    }

    html! {
        <ContextProvider<SessionHandle> context={props.session.clone()}>
            <ContextProvider<AuthContext> context={auth_state}>
                {props.children.clone()}
            </ContextProvider<AuthContext>>
        </ContextProvider<SessionHandle>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to reach the session manager for sign-in, sign-up, and sign-out
#[hook]
pub fn use_session_manager() -> Rc<SessionManager> {
    use_context::<SessionHandle>()
        .expect("SessionHandle not found. Make sure to wrap your component with AuthProvider")
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u-1".into(),
            email: "jane@x.com".into(),
            username: Some("jane".into()),
        }
    }

    #[test]
    fn snapshot_replaces_state() {
        let state = Rc::new(AuthContextData::default());
        let next = state.reduce(AuthAction::Snapshot(AuthSnapshot {
            user: Some(user()),
            loading: false,
        }));
        assert_eq!(next.user, Some(user()));
        assert!(!next.is_loading);
    }

    #[test]
    fn identical_snapshot_keeps_state() {
        let state = Rc::new(AuthContextData {
            user: None,
            is_loading: false,
        });
        let next = state.clone().reduce(AuthAction::Snapshot(AuthSnapshot::default()));
        assert!(Rc::ptr_eq(&state, &next));
    }
}

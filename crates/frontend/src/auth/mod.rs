mod context;

pub use context::{AuthProvider, SessionHandle, use_auth, use_session_manager};

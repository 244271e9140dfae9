//! Host capabilities the session layer needs besides storage

use futures::future::LocalBoxFuture;

/// A detached unit of work on the UI thread
pub type LocalTask = LocalBoxFuture<'static, ()>;

/// Document location control
pub trait Navigator {
    /// Scheme, host, and port of the current document
    fn origin(&self) -> String;

    fn pathname(&self) -> String;

    /// Fragment including the leading `#`, or empty
    fn hash(&self) -> String;

    /// Full navigation that adds a history entry
    fn assign(&self, url: &str);

    /// Full navigation that replaces the current history entry
    fn replace(&self, url: &str);

    /// Change only the fragment
    fn set_hash(&self, hash: &str);
}

/// Fire-and-forget execution of tasks nobody awaits
pub trait Spawner {
    fn spawn(&self, task: LocalTask);
}

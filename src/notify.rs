//! Toast-style user notifications.

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Routes notifications to the log. Used by the CLI, where there is no
/// toast surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "notify", "{message}");
    }
}

//! User-facing failure notifications.

/// Receiver of the message derived for each failed request.
pub trait Notifier: Send + Sync {
    /// Show an error message to the user.
    fn notify_error(&self, message: &str);
}

/// Notifier that writes to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        log::error!("{}", message);
    }
}

//! Hooks for side effects outside the pipeline
//!
//! The batch runner reports completion through a [`Notifier`]. The binary wires
//! in a desktop backend; tests and headless runs use [`NoOpNotifier`].

/// A completion message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    /// How long the desktop should keep the message visible
    pub timeout_secs: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification backend unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to deliver notification: {0}")]
    Delivery(String),
}

/// Trait for delivering completion notifications
pub trait Notifier {
    /// Short backend name used in log lines
    fn name(&self) -> &'static str;

    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// No-op implementation for when notifications are disabled
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        (**self).notify(notification)
    }
}

//! Freedesktop notifications over the D-Bus session bus

use logomark_core::constants::APP_NAME;
use logomark_core::{Notification, Notifier, NotifyError};
use std::collections::HashMap;
use zbus::zvariant::Value;

const DESTINATION: &str = "org.freedesktop.Notifications";
const OBJECT_PATH: &str = "/org/freedesktop/Notifications";
const INTERFACE: &str = "org.freedesktop.Notifications";

/// Sends notifications through `org.freedesktop.Notifications.Notify`.
///
/// A session bus connection is opened per notification; a batch sends one.
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Whether the notification service can be reached on the session bus
    pub fn is_available() -> bool {
        if let Ok(conn) = zbus::blocking::Connection::session() {
            let proxy = zbus::blocking::Proxy::new(&conn, DESTINATION, OBJECT_PATH, INTERFACE);
            return proxy.is_ok();
        }
        false
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn name(&self) -> &'static str {
        "dbus"
    }

    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let conn = zbus::blocking::Connection::session()
            .map_err(|e| NotifyError::Unavailable(e.to_string()))?;
        let proxy = zbus::blocking::Proxy::new(&conn, DESTINATION, OBJECT_PATH, INTERFACE)
            .map_err(|e| NotifyError::Unavailable(e.to_string()))?;

        let actions: Vec<&str> = Vec::new();
        let hints: HashMap<&str, Value<'_>> = HashMap::new();

        let id: u32 = proxy
            .call(
                "Notify",
                &(
                    self.app_name.as_str(),
                    0u32,
                    "",
                    notification.title.as_str(),
                    notification.message.as_str(),
                    actions,
                    hints,
                    expire_timeout_ms(notification.timeout_secs),
                ),
            )
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        tracing::debug!(id = id, title = %notification.title, "Desktop notification sent");
        Ok(())
    }
}

/// `expire_timeout` argument of `Notify`, in milliseconds. Zero lets the
/// server pick its default.
pub fn expire_timeout_ms(timeout_secs: u32) -> i32 {
    i32::try_from(u64::from(timeout_secs) * 1000).unwrap_or(i32::MAX)
}

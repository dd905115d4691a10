//! Desktop notification backends

mod dbus;

pub use dbus::{expire_timeout_ms, DesktopNotifier};

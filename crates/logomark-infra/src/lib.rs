//! Infrastructure adapters for the logomark binary: tracing setup and the
//! desktop notification backend.

pub mod notification;
pub mod telemetry;

pub use notification::DesktopNotifier;
pub use telemetry::init_tracing;

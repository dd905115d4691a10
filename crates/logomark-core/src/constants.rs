//! Default values for a batch run.

pub const DEFAULT_INPUT_DIR: &str = "input_images";
pub const DEFAULT_OUTPUT_DIR: &str = "output_images";
pub const DEFAULT_LOGO_PATH: &str = "logo.psd";

/// Raw-photo extensions deleted from the input directory before conversion.
pub const UNWANTED_EXTENSIONS: &[&str] = &[".nef", ".raw", ".cr2"];

pub const LOGO_OPACITY: f32 = 0.8;
pub const LOGO_MARGIN: u32 = 10;
pub const PORTRAIT_SCALE: f64 = 0.5;
pub const LANDSCAPE_SCALE: f64 = 0.3;

pub const APP_NAME: &str = "logomark";
pub const NOTIFICATION_TITLE: &str = "Image processing";
pub const NOTIFICATION_MESSAGE: &str = "Conversion completed successfully!";
pub const NOTIFICATION_TIMEOUT_SECS: u32 = 5;

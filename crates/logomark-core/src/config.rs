//! Configuration module
//!
//! A batch run is described by a single [`BatchConfig`]. The defaults match the
//! fixed layout the tool has always used (`input_images/`, `output_images/`,
//! `logo.psd` in the working directory); every value can be overridden from the
//! environment or a `.env` file.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_LOGO_PATH, DEFAULT_OUTPUT_DIR, LANDSCAPE_SCALE, LOGO_MARGIN,
    LOGO_OPACITY, NOTIFICATION_MESSAGE, NOTIFICATION_TIMEOUT_SECS, NOTIFICATION_TITLE,
    PORTRAIT_SCALE, UNWANTED_EXTENSIONS,
};

/// Logo placement and blending settings
#[derive(Clone, Debug, PartialEq)]
pub struct WatermarkSettings {
    /// Multiplier applied to the logo alpha channel
    pub opacity: f32,
    /// Distance in pixels from the left and bottom edges
    pub margin: u32,
    /// Relative footprint for portrait images
    pub portrait_scale: f64,
    /// Relative footprint for landscape and square images
    pub landscape_scale: f64,
}

impl Default for WatermarkSettings {
    fn default() -> Self {
        Self {
            opacity: LOGO_OPACITY,
            margin: LOGO_MARGIN,
            portrait_scale: PORTRAIT_SCALE,
            landscape_scale: LANDSCAPE_SCALE,
        }
    }
}

/// Completion notification settings
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationConfig {
    pub enabled: bool,
    pub title: String,
    pub message: String,
    pub timeout_secs: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: NOTIFICATION_TITLE.to_string(),
            message: NOTIFICATION_MESSAGE.to_string(),
            timeout_secs: NOTIFICATION_TIMEOUT_SECS,
        }
    }
}

/// Configuration for one batch conversion
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub logo_path: PathBuf,
    /// Lowercase suffixes (including the dot) of files removed before conversion
    pub unwanted_extensions: Vec<String>,
    pub watermark: WatermarkSettings,
    pub notification: NotificationConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            unwanted_extensions: UNWANTED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            watermark: WatermarkSettings::default(),
            notification: NotificationConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Build a configuration rooted at `base`, keeping the default relative layout.
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            input_dir: base.join(DEFAULT_INPUT_DIR),
            output_dir: base.join(DEFAULT_OUTPUT_DIR),
            logo_path: base.join(DEFAULT_LOGO_PATH),
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Missing variables keep their defaults. Numeric values that fail to parse
    /// fall back to the default as well; [`BatchConfig::validate`] is run on the
    /// result so out-of-range values are still rejected.
    pub fn from_vars<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let path_var = |key: &str, default: PathBuf| -> PathBuf {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        let unwanted_extensions = match lookup("LOGOMARK_UNWANTED_EXTENSIONS") {
            Some(raw) => parse_extensions(&raw),
            None => defaults.unwanted_extensions.clone(),
        };

        let watermark = WatermarkSettings {
            opacity: parse_or(&lookup, "LOGOMARK_LOGO_OPACITY", defaults.watermark.opacity),
            margin: parse_or(&lookup, "LOGOMARK_LOGO_MARGIN", defaults.watermark.margin),
            portrait_scale: parse_or(
                &lookup,
                "LOGOMARK_PORTRAIT_SCALE",
                defaults.watermark.portrait_scale,
            ),
            landscape_scale: parse_or(
                &lookup,
                "LOGOMARK_LANDSCAPE_SCALE",
                defaults.watermark.landscape_scale,
            ),
        };

        let notification = NotificationConfig {
            enabled: lookup("LOGOMARK_NOTIFICATIONS_ENABLED")
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.notification.enabled),
            timeout_secs: parse_or(
                &lookup,
                "LOGOMARK_NOTIFICATION_TIMEOUT_SECS",
                defaults.notification.timeout_secs,
            ),
            ..defaults.notification.clone()
        };

        let config = Self {
            input_dir: path_var("LOGOMARK_INPUT_DIR", defaults.input_dir.clone()),
            output_dir: path_var("LOGOMARK_OUTPUT_DIR", defaults.output_dir.clone()),
            logo_path: path_var("LOGOMARK_LOGO_PATH", defaults.logo_path.clone()),
            unwanted_extensions,
            watermark,
            notification,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let wm = &self.watermark;

        if !(wm.opacity > 0.0 && wm.opacity <= 1.0) {
            return Err(anyhow::anyhow!(
                "LOGOMARK_LOGO_OPACITY must be in (0, 1], got {}",
                wm.opacity
            ));
        }
        if !(wm.portrait_scale > 0.0 && wm.portrait_scale <= 1.0) {
            return Err(anyhow::anyhow!(
                "LOGOMARK_PORTRAIT_SCALE must be in (0, 1], got {}",
                wm.portrait_scale
            ));
        }
        if !(wm.landscape_scale > 0.0 && wm.landscape_scale <= 1.0) {
            return Err(anyhow::anyhow!(
                "LOGOMARK_LANDSCAPE_SCALE must be in (0, 1], got {}",
                wm.landscape_scale
            ));
        }
        if self.unwanted_extensions.is_empty() {
            return Err(anyhow::anyhow!(
                "LOGOMARK_UNWANTED_EXTENSIONS must list at least one extension"
            ));
        }
        if self.input_dir == self.output_dir {
            return Err(anyhow::anyhow!(
                "Input and output directories must differ ({})",
                self.input_dir.display()
            ));
        }

        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Normalize a comma separated extension list: lowercase, leading dot, no blanks.
fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .map(|s| if s.starts_with('.') { s } else { format!(".{}", s) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_fixed_layout() {
        let config = BatchConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("input_images"));
        assert_eq!(config.output_dir, PathBuf::from("output_images"));
        assert_eq!(config.logo_path, PathBuf::from("logo.psd"));
        assert_eq!(config.unwanted_extensions, vec![".nef", ".raw", ".cr2"]);
        assert_eq!(config.watermark.opacity, 0.8);
        assert_eq!(config.watermark.margin, 10);
        assert_eq!(config.watermark.portrait_scale, 0.5);
        assert_eq!(config.watermark.landscape_scale, 0.3);
        assert_eq!(config.notification.timeout_secs, 5);
        assert!(config.notification.enabled);
    }

    #[test]
    fn test_from_vars_empty_uses_defaults() {
        let config = BatchConfig::from_vars(|_| None).unwrap();
        assert_eq!(config, BatchConfig::default());
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = BatchConfig::from_vars(lookup_from(&[
            ("LOGOMARK_INPUT_DIR", "/tmp/in"),
            ("LOGOMARK_OUTPUT_DIR", "/tmp/out"),
            ("LOGOMARK_LOGO_PATH", "/tmp/brand.psd"),
            ("LOGOMARK_LOGO_OPACITY", "0.5"),
            ("LOGOMARK_LOGO_MARGIN", "24"),
            ("LOGOMARK_NOTIFICATIONS_ENABLED", "false"),
        ]))
        .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("/tmp/in"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.logo_path, PathBuf::from("/tmp/brand.psd"));
        assert_eq!(config.watermark.opacity, 0.5);
        assert_eq!(config.watermark.margin, 24);
        assert!(!config.notification.enabled);
    }

    #[test]
    fn test_unparseable_number_falls_back() {
        let config =
            BatchConfig::from_vars(lookup_from(&[("LOGOMARK_LOGO_MARGIN", "wide")])).unwrap();
        assert_eq!(config.watermark.margin, 10);
    }

    #[test]
    fn test_extension_list_is_normalized() {
        let config = BatchConfig::from_vars(lookup_from(&[(
            "LOGOMARK_UNWANTED_EXTENSIONS",
            " NEF, .Raw ,,arw",
        )]))
        .unwrap();
        assert_eq!(config.unwanted_extensions, vec![".nef", ".raw", ".arw"]);
    }

    #[test]
    fn test_validate_rejects_out_of_range_opacity() {
        let result = BatchConfig::from_vars(lookup_from(&[("LOGOMARK_LOGO_OPACITY", "1.5")]));
        assert!(result.is_err());

        let result = BatchConfig::from_vars(lookup_from(&[("LOGOMARK_LOGO_OPACITY", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_extension_list() {
        let result =
            BatchConfig::from_vars(lookup_from(&[("LOGOMARK_UNWANTED_EXTENSIONS", " , ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_same_input_and_output() {
        let result = BatchConfig::from_vars(lookup_from(&[
            ("LOGOMARK_INPUT_DIR", "photos"),
            ("LOGOMARK_OUTPUT_DIR", "photos"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_rooted_at_joins_default_layout() {
        let config = BatchConfig::rooted_at("/srv/batch");
        assert_eq!(config.input_dir, PathBuf::from("/srv/batch/input_images"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/batch/output_images"));
        assert_eq!(config.logo_path, PathBuf::from("/srv/batch/logo.psd"));
    }

    #[test]
    fn test_parse_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool(" TRUE "));
        assert!(parse_bool("on"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("nope"));
    }
}

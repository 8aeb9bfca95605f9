//! Site configuration read from the process environment.
//!
//! | Variable              | Default                                     |
//! |-----------------------|---------------------------------------------|
//! | `BACKEND_URL`         | `https://vitrixlab.pythonanywhere.com`      |
//! | `CONTACT_URL`         | `<BACKEND_URL>/api/v1/test-email`           |
//! | `RECAPTCHA_SITE_KEY`  | Google's public reCAPTCHA test key          |
//! | `FRAME_TIMEOUT_MS`    | `5000` (3000 to 5000)                       |
//! | `CONTACT_TIMEOUT_MS`  | `10000`                                     |
use std::ops::RangeInclusive;
#[cfg(feature = "ssr")]
use std::sync::OnceLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "https://vitrixlab.pythonanywhere.com";
/// Always passes verification. Replace in production.
pub const DEFAULT_RECAPTCHA_SITE_KEY: &str = "6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI";
pub const DEFAULT_FRAME_TIMEOUT_MS: u64 = 5000;
pub const FRAME_TIMEOUT_RANGE_MS: RangeInclusive<u64> = 3000..=5000;
pub const DEFAULT_CONTACT_TIMEOUT_MS: u64 = 10_000;

#[cfg(feature = "ssr")]
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be between {min} and {max} ms, got {value}")]
    OutOfRange {
        var: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
    #[error("site configuration was already installed")]
    AlreadyInstalled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub backend_url: String,
    pub contact_url: String,
    pub recaptcha_site_key: String,
    pub frame_timeout: Duration,
    pub contact_timeout: Duration,
}

/// The part of the configuration the browser is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfig {
    pub recaptcha_site_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            contact_url: format!("{DEFAULT_BACKEND_URL}/api/v1/test-email"),
            recaptcha_site_key: DEFAULT_RECAPTCHA_SITE_KEY.to_string(),
            frame_timeout: Duration::from_millis(DEFAULT_FRAME_TIMEOUT_MS),
            contact_timeout: Duration::from_millis(DEFAULT_CONTACT_TIMEOUT_MS),
        }
    }
}

fn url(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl { var, value })
    }
}

fn millis(var: &'static str, value: String) -> Result<u64, ConfigError> {
    let parsed = value.trim().parse().ok();
    parsed.ok_or(ConfigError::InvalidNumber { var, value })
}

impl SiteConfig {
    /// Build from any key lookup. Unset and empty variables take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend_url = match get("BACKEND_URL") {
            Some(v) => url("BACKEND_URL", v)?,
            None => DEFAULT_BACKEND_URL.to_string(),
        };
        let contact_url = match get("CONTACT_URL") {
            Some(v) => url("CONTACT_URL", v)?,
            None => format!("{backend_url}/api/v1/test-email"),
        };
        let recaptcha_site_key = get("RECAPTCHA_SITE_KEY")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_RECAPTCHA_SITE_KEY.to_string());

        let frame_timeout_ms = match get("FRAME_TIMEOUT_MS") {
            Some(v) => millis("FRAME_TIMEOUT_MS", v)?,
            None => DEFAULT_FRAME_TIMEOUT_MS,
        };
        if !FRAME_TIMEOUT_RANGE_MS.contains(&frame_timeout_ms) {
            return Err(ConfigError::OutOfRange {
                var: "FRAME_TIMEOUT_MS",
                value: frame_timeout_ms,
                min: *FRAME_TIMEOUT_RANGE_MS.start(),
                max: *FRAME_TIMEOUT_RANGE_MS.end(),
            });
        }
        let contact_timeout_ms = match get("CONTACT_TIMEOUT_MS") {
            Some(v) => millis("CONTACT_TIMEOUT_MS", v)?,
            None => DEFAULT_CONTACT_TIMEOUT_MS,
        };

        Ok(Self {
            backend_url,
            contact_url,
            recaptcha_site_key,
            frame_timeout: Duration::from_millis(frame_timeout_ms),
            contact_timeout: Duration::from_millis(contact_timeout_ms),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn frame_url(&self) -> String {
        format!("{}/api/fluid-stream", self.backend_url)
    }

    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            recaptcha_site_key: self.recaptcha_site_key.clone(),
        }
    }

    /// Make this the configuration returned by [`SiteConfig::global`].
    #[cfg(feature = "ssr")]
    pub fn install(self) -> Result<&'static SiteConfig, ConfigError> {
        SITE_CONFIG
            .set(self)
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        Ok(Self::global())
    }

    /// The installed configuration, or the environment's if nothing was installed.
    #[cfg(feature = "ssr")]
    pub fn global() -> &'static SiteConfig {
        SITE_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|err| {
                tracing::warn!("invalid site configuration, using defaults: {err}");
                Self::default()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(
            cfg.frame_url(),
            "https://vitrixlab.pythonanywhere.com/api/fluid-stream"
        );
        assert_eq!(
            cfg.contact_url,
            "https://vitrixlab.pythonanywhere.com/api/v1/test-email"
        );
        assert_eq!(cfg.frame_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_backend_url_drives_contact_default() {
        let cfg = config(&[("BACKEND_URL", "http://localhost:8001/")]).unwrap();
        assert_eq!(cfg.frame_url(), "http://localhost:8001/api/fluid-stream");
        assert_eq!(cfg.contact_url, "http://localhost:8001/api/v1/test-email");
    }

    #[test]
    fn test_explicit_values() {
        let cfg = config(&[
            ("CONTACT_URL", "https://mail.example.com/send"),
            ("RECAPTCHA_SITE_KEY", " site-key "),
            ("FRAME_TIMEOUT_MS", "3000"),
            ("CONTACT_TIMEOUT_MS", "2500"),
        ])
        .unwrap();
        assert_eq!(cfg.contact_url, "https://mail.example.com/send");
        assert_eq!(cfg.public().recaptcha_site_key, "site-key");
        assert_eq!(cfg.frame_timeout, Duration::from_millis(3000));
        assert_eq!(cfg.contact_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let cfg = config(&[("BACKEND_URL", ""), ("FRAME_TIMEOUT_MS", "  ")]).unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config(&[("BACKEND_URL", "ftp://example.com")]),
            Err(ConfigError::InvalidUrl { var: "BACKEND_URL", .. })
        ));
        assert!(matches!(
            config(&[("FRAME_TIMEOUT_MS", "fast")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert_eq!(
            config(&[("FRAME_TIMEOUT_MS", "10000")]),
            Err(ConfigError::OutOfRange {
                var: "FRAME_TIMEOUT_MS",
                value: 10000,
                min: 3000,
                max: 5000
            })
        );
    }
}

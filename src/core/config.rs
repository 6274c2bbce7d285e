use super::constants::{DEFAULT_ENDPOINT_URL, FOLLOWER_EASE, REDIRECT_DELAY_MS};
use super::reveal::RevealOptions;
use super::submit::SubmissionPolicy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("endpoint_url must be an http(s) URL: {0}")]
    Endpoint(String),
    #[error("follower_ease must be in (0, 1): {0}")]
    Ease(f32),
    #[error("reveal.threshold must be in [0, 1]: {0}")]
    Threshold(f64),
    #[error("reveal.bottom_margin_px must not be negative: {0}")]
    Margin(f64),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// Page-level settings, read from an optional JSON block in the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub endpoint_url: String,
    pub submission_policy: SubmissionPolicy,
    pub redirect_delay_ms: u32,
    pub follower_ease: f32,
    pub reveal: RevealOptions,
    pub log_level: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            submission_policy: SubmissionPolicy::default(),
            redirect_delay_ms: REDIRECT_DELAY_MS,
            follower_ease: FOLLOWER_EASE,
            reveal: RevealOptions::default(),
            log_level: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.endpoint_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Endpoint(self.endpoint_url.clone()));
        }
        if !(self.follower_ease > 0.0 && self.follower_ease < 1.0) {
            return Err(ConfigError::Ease(self.follower_ease));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Threshold(self.reveal.threshold));
        }
        if !(self.reveal.bottom_margin_px >= 0.0) {
            return Err(ConfigError::Margin(self.reveal.bottom_margin_px));
        }
        self.level()?;
        Ok(())
    }

    /// CSS duration matching the return-home delay, for the toast progress bar.
    pub fn redirect_css_duration(&self) -> String {
        format!("{}ms", self.redirect_delay_ms)
    }

    /// Console log level; `Info` unless configured.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        match self.log_level.as_deref() {
            None => Ok(log::Level::Info),
            Some(s) => s
                .parse::<log::Level>()
                .map_err(|_| ConfigError::LogLevel(s.to_string())),
        }
    }
}

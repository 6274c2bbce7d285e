// Host-side tests for page configuration parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
    pub mod submit {
        include!("../src/core/submit.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use crate::core::config::*;
use crate::core::constants::{DEFAULT_ENDPOINT_URL, FOLLOWER_EASE};
use crate::core::submit::SubmissionPolicy;

#[test]
fn defaults_match_the_shipped_site() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.endpoint_url, DEFAULT_ENDPOINT_URL);
    assert_eq!(cfg.submission_policy, SubmissionPolicy::Optimistic);
    assert_eq!(cfg.redirect_delay_ms, 3000);
    assert_eq!(cfg.follower_ease, FOLLOWER_EASE);
    assert_eq!(cfg.reveal.threshold, 0.1);
    assert_eq!(cfg.reveal.bottom_margin_px, 50.0);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.level().unwrap(), log::Level::Info);
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = SiteConfig::from_json(
        r#"{
            "submission_policy": "response_confirmed",
            "redirect_delay_ms": 1500,
            "reveal": { "bottom_margin_px": 0 },
            "log_level": "debug"
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.submission_policy, SubmissionPolicy::ResponseConfirmed);
    assert_eq!(cfg.redirect_delay_ms, 1500);
    assert_eq!(cfg.reveal.bottom_margin_px, 0.0);
    assert_eq!(cfg.reveal.threshold, 0.1);
    assert_eq!(cfg.endpoint_url, DEFAULT_ENDPOINT_URL);
    assert_eq!(cfg.level().unwrap(), log::Level::Debug);
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        SiteConfig::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "redirect_delay_ms": -1 }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn out_of_range_values_are_rejected() {
    assert!(matches!(
        SiteConfig::from_json(r#"{ "endpoint_url": "ftp://example.com" }"#),
        Err(ConfigError::Endpoint(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "follower_ease": 1.0 }"#),
        Err(ConfigError::Ease(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "follower_ease": 0 }"#),
        Err(ConfigError::Ease(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#),
        Err(ConfigError::Threshold(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "reveal": { "bottom_margin_px": -10 } }"#),
        Err(ConfigError::Margin(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "log_level": "loud" }"#),
        Err(ConfigError::LogLevel(_))
    ));
}

#[test]
fn toast_duration_follows_the_redirect_delay() {
    assert_eq!(SiteConfig::default().redirect_css_duration(), "3000ms");
    let cfg = SiteConfig::from_json(r#"{ "redirect_delay_ms": 1500 }"#).unwrap();
    assert_eq!(cfg.redirect_css_duration(), "1500ms");
}

//! Site configuration.
//!
//! Every field has a default matching the live site, so an empty JSON object
//! (or no config at all) yields the stock behaviour. Pages may override
//! individual values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::carousel::CarouselConfig;
use crate::notification::NotificationTiming;
use crate::page;
use crate::slideshow::DEFAULT_INTERVAL_MS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "serde")]
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SiteConfig {
    pub slideshow_interval_ms: u32,
    pub header_scroll_threshold_px: f64,
    pub back_to_top_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
    /// Fraction of an element that must be visible before it is revealed.
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub submit_latency_ms: u32,
    pub notification_display_ms: u32,
    pub notification_exit_ms: u32,
    pub search_redirect_delay_ms: u32,
    pub anchor_gap_px: f64,
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub log_level: String,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            slideshow_interval_ms: DEFAULT_INTERVAL_MS,
            header_scroll_threshold_px: page::HEADER_SCROLL_THRESHOLD_PX,
            back_to_top_threshold_px: page::BACK_TO_TOP_THRESHOLD_PX,
            mobile_breakpoint_px: page::MOBILE_BREAKPOINT_PX,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            submit_latency_ms: 2000,
            notification_display_ms: crate::notification::DISPLAY_MS,
            notification_exit_ms: crate::notification::EXIT_MS,
            search_redirect_delay_ms: crate::search::REDIRECT_DELAY_MS,
            anchor_gap_px: page::ANCHOR_GAP_PX,
            log_level: "info".to_string(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON config. Missing keys take defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let timings = [
            ("slideshowIntervalMs", self.slideshow_interval_ms),
            ("submitLatencyMs", self.submit_latency_ms),
            ("notificationDisplayMs", self.notification_display_ms),
            ("notificationExitMs", self.notification_exit_ms),
            ("searchRedirectDelayMs", self.search_redirect_delay_ms),
            ("carousel.autoplay.delay", self.carousel.autoplay.delay),
        ];
        for (field, value) in timings {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Invalid {
                field: "revealThreshold",
                reason: "must be within [0, 1]".to_string(),
            });
        }

        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Invalid {
                field: "logLevel",
                reason: format!("unknown level {:?}", self.log_level),
            });
        }

        if self.carousel.slides_per_view == 0
            || self.carousel.breakpoints.values().any(|bp| bp.slides_per_view == 0)
        {
            return Err(ConfigError::Invalid {
                field: "carousel.slidesPerView",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn notification_timing(&self) -> NotificationTiming {
        NotificationTiming {
            display_ms: self.notification_display_ms,
            exit_ms: self.notification_exit_ms,
        }
    }

    /// Falls back to `INFO` for levels that do not parse.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_match_site() {
        let cfg = SiteConfig::default();
        cfg.validate().expect("default config validates");
        assert_eq!(cfg.slideshow_interval_ms, 5000);
        assert_eq!(cfg.submit_latency_ms, 2000);
        assert_eq!(cfg.search_redirect_delay_ms, 2000);
        assert_eq!(cfg.notification_timing(), NotificationTiming::default());
        assert_eq!(cfg.tracing_level(), tracing::Level::INFO);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "slideshowIntervalMs": 7000, "logLevel": "debug" }"#)
            .expect("valid config");
        assert_eq!(cfg.slideshow_interval_ms, 7000);
        assert_eq!(cfg.tracing_level(), tracing::Level::DEBUG);
        assert_eq!(cfg.header_scroll_threshold_px, 100.0);
        assert_eq!(cfg.carousel, CarouselConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn carousel_overrides_merge_with_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "carousel": { "autoplay": { "delay": 6000, "disableOnInteraction": true } } }"#)
            .expect("valid config");
        assert_eq!(cfg.carousel.autoplay.delay, 6000);
        assert!(cfg.carousel.looped);
        assert_eq!(cfg.carousel.slides_for_width(1300), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "slideshowIntervalMs": 0 }"#),
            Err(ConfigError::Invalid { field: "slideshowIntervalMs", .. })
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "searchRedirectDelayMs": 0 }"#),
            Err(ConfigError::Invalid { field: "searchRedirectDelayMs", .. })
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "notificationExitMs": 0 }"#),
            Err(ConfigError::Invalid { field: "notificationExitMs", .. })
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "revealThreshold": 1.5 }"#),
            Err(ConfigError::Invalid { field: "revealThreshold", .. })
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "logLevel": "loud" }"#),
            Err(ConfigError::Invalid { field: "logLevel", .. })
        ));
        assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}

//! Transient notification banners.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DISPLAY_MS: u32 = 3000;
pub const EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Success,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#4caf50",
            Severity::Info => "#2196f3",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything other than `success` is informational.
impl FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.trim().eq_ignore_ascii_case("success") {
            Severity::Success
        } else {
            Severity::Info
        })
    }
}

/// Entry and exit animation phases of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.severity)
    }

    pub fn inline_style(&self, phase: Phase) -> String {
        let animation = match phase {
            Phase::Entering => "slideInRight 0.3s ease",
            Phase::Leaving => "slideOutRight 0.3s ease",
        };
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 16px 24px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.2); \
             z-index: 10000; animation: {animation};",
            self.severity.background()
        )
    }
}

/// How long a banner stays up and how long its exit transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            display_ms: DISPLAY_MS,
            exit_ms: EXIT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_severity_is_info() {
        assert_eq!("success".parse::<Severity>(), Ok(Severity::Success));
        assert_eq!("SUCCESS".parse::<Severity>(), Ok(Severity::Success));
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("".parse::<Severity>(), Ok(Severity::Info));
    }

    #[test]
    fn class_and_colour_follow_severity() {
        let ok = Notification::success("saved");
        assert_eq!(ok.class_name(), "notification notification-success");
        assert!(ok.inline_style(Phase::Entering).contains("#4caf50"));

        let info = Notification::info("hello");
        assert_eq!(info.class_name(), "notification notification-info");
        assert!(info.inline_style(Phase::Entering).contains("#2196f3"));
    }

    #[test]
    fn phase_selects_animation() {
        let n = Notification::info("x");
        assert!(n.inline_style(Phase::Entering).contains("slideInRight"));
        assert!(n.inline_style(Phase::Leaving).contains("slideOutRight"));
    }
}

use crate::cli::Args;
use chrono::{FixedOffset, Offset, Utc};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct FakeModelConfig {
    pub labels: Vec<String>,
    pub top_k: usize,
    pub load_delay: Duration,
    pub classify_delay: Duration,
    pub fail_load: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub display: DisplayKind,
    pub logger_timezone: FixedOffset,
    pub fake_model: FakeModelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Image classifier".to_string(),
            display: DisplayKind::Console,
            logger_timezone: Utc.fix(),
            fake_model: FakeModelConfig::default(),
        }
    }
}

impl Default for FakeModelConfig {
    fn default() -> Self {
        Self {
            labels: [
                "tabby cat",
                "Egyptian cat",
                "golden retriever",
                "Labrador retriever",
                "sports car",
                "mountain bike",
                "espresso",
                "laptop",
                "daisy",
                "goldfish",
                "teddy bear",
                "acoustic guitar",
            ]
            .iter()
            .map(|label| label.to_string())
            .collect(),
            // mobilenet returns its top three by default
            top_k: 3,
            load_delay: Duration::from_millis(1500),
            classify_delay: Duration::from_millis(300),
            fail_load: false,
        }
    }
}

impl Config {
    pub fn with_args(mut self, args: &Args) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if args.gui {
            self.display = DisplayKind::Gui;
        }

        if args.fail_model_load {
            self.fake_model.fail_load = true;
        }

        if let Some(top_k) = args.top_k {
            if top_k == 0 {
                return Err("--top-k must be at least 1".into());
            }
            self.fake_model.top_k = top_k;
        }

        if let Some(ms) = args.load_delay_ms {
            self.fake_model.load_delay = Duration::from_millis(ms);
        }

        if let Some(ms) = args.classify_delay_ms {
            self.fake_model.classify_delay = Duration::from_millis(ms);
        }

        if let Some(hours) = args.utc_offset_hours {
            self.logger_timezone = hours
                .checked_mul(3600)
                .and_then(FixedOffset::east_opt)
                .ok_or_else(|| format!("invalid UTC offset: {} hours", hours))?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_without_args() {
        let args = Args::parse_from(["snap-classify"]);
        let config = Config::default().with_args(&args).unwrap();

        assert_eq!(config.display, DisplayKind::Console);
        assert_eq!(config.fake_model.top_k, 3);
        assert!(!config.fake_model.fail_load);
        assert_eq!(config.logger_timezone.local_minus_utc(), 0);
    }

    #[test]
    fn test_args_override_defaults() {
        let args = Args::parse_from([
            "snap-classify",
            "--gui",
            "--fail-model-load",
            "--top-k",
            "5",
            "--load-delay-ms",
            "0",
            "--utc-offset-hours",
            "-7",
        ]);
        let config = Config::default().with_args(&args).unwrap();

        assert_eq!(config.display, DisplayKind::Gui);
        assert!(config.fake_model.fail_load);
        assert_eq!(config.fake_model.top_k, 5);
        assert_eq!(config.fake_model.load_delay, Duration::ZERO);
        assert_eq!(config.logger_timezone.local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn test_rejects_bad_values() {
        let args = Args::parse_from(["snap-classify", "--top-k", "0"]);
        assert!(Config::default().with_args(&args).is_err());

        let args = Args::parse_from(["snap-classify", "--utc-offset-hours", "30"]);
        assert!(Config::default().with_args(&args).is_err());
    }
}

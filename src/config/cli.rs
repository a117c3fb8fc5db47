use crate::config::{defaults, video};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "reel-poster")]
#[command(about = "Upload a video to a Facebook Page as a Reel")]
pub struct CliConfig {
    #[arg(long, default_value = defaults::VIDEO_URL)]
    pub video_url: String,

    #[arg(
        long,
        help = "Post the stitched reel of a date (YYYY-MM-DD or 'today') instead of --video-url"
    )]
    pub date: Option<String>,

    #[arg(long, default_value = defaults::VIDEO_BUCKET)]
    pub bucket: String,

    #[arg(long, default_value = defaults::DESCRIPTION)]
    pub description: String,

    #[arg(long, default_value = defaults::TOKEN_ENV, help = "Environment variable holding the access token")]
    pub token_env: String,

    #[arg(long, help = "Facebook Page id (defaults to $FACEBOOK_PAGE_ID, then 'me')")]
    pub page_id: Option<String>,

    #[arg(long, default_value = defaults::GRAPH_API_BASE)]
    pub graph_api_base: String,

    #[arg(long, default_value = defaults::RUPLOAD_BASE)]
    pub rupload_base: String,

    #[arg(long, default_value = defaults::API_VERSION)]
    pub api_version: String,

    #[arg(long, default_value_t = defaults::POLL_INTERVAL_SECS)]
    pub poll_interval_secs: u64,

    #[arg(long, default_value_t = defaults::MAX_POLL_ATTEMPTS)]
    pub max_poll_attempts: u32,

    #[arg(long, default_value_t = defaults::TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(
        long,
        help = "Load settings from a TOML file instead of flags",
        conflicts_with_all = [
            "video_url",
            "date",
            "bucket",
            "description",
            "token_env",
            "page_id",
            "graph_api_base",
            "rupload_base",
            "api_version",
            "poll_interval_secs",
            "max_poll_attempts",
            "timeout_seconds",
        ]
    )]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            video_url: defaults::VIDEO_URL.to_string(),
            date: None,
            bucket: defaults::VIDEO_BUCKET.to_string(),
            description: defaults::DESCRIPTION.to_string(),
            token_env: defaults::TOKEN_ENV.to_string(),
            page_id: None,
            graph_api_base: defaults::GRAPH_API_BASE.to_string(),
            rupload_base: defaults::RUPLOAD_BASE.to_string(),
            api_version: defaults::API_VERSION.to_string(),
            poll_interval_secs: defaults::POLL_INTERVAL_SECS,
            max_poll_attempts: defaults::MAX_POLL_ATTEMPTS,
            timeout_seconds: defaults::TIMEOUT_SECONDS,
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl CliConfig {
    /// 處理 --date 與頁面 id 的預設值
    pub fn resolve(mut self) -> Result<Self> {
        if let Some(date) = &self.date {
            let date = video::parse_date("date", date)?;
            self.video_url = video::stitched_video_url(&self.bucket, date);
        }

        if self.page_id.is_none() {
            self.page_id = defaults::page_id_from_env();
        }

        Ok(self)
    }
}

impl ConfigProvider for CliConfig {
    fn video_url(&self) -> &str {
        &self.video_url
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn token_env(&self) -> &str {
        &self.token_env
    }

    fn page_id(&self) -> &str {
        self.page_id.as_deref().unwrap_or(defaults::PAGE_ID)
    }

    fn graph_api_base(&self) -> &str {
        &self.graph_api_base
    }

    fn rupload_base(&self) -> &str {
        &self.rupload_base
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    fn max_poll_attempts(&self) -> u32 {
        self.max_poll_attempts
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        super::validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.video_url(), defaults::VIDEO_URL);
        assert_eq!(config.token_env(), "FACEBOOK_ACCESS_TOKEN");
    }

    #[test]
    fn test_resolve_date_overrides_video_url() {
        let config = CliConfig {
            date: Some("2025-06-02".to_string()),
            page_id: Some("42".to_string()),
            ..CliConfig::default()
        }
        .resolve()
        .unwrap();

        assert_eq!(
            config.video_url(),
            "https://storage.googleapis.com/bebop_data/videos/2025-06-02/stitched/stitched_reel_2025-06-02.mp4"
        );
        assert_eq!(config.page_id(), "42");
    }

    #[test]
    fn test_resolve_rejects_bad_date() {
        let config = CliConfig {
            date: Some("yesterday".to_string()),
            ..CliConfig::default()
        };
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = CliConfig {
            video_url: "not a url".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            max_poll_attempts: 0,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            api_version: "23".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_without_flags_uses_defaults() {
        let config = CliConfig::try_parse_from(["reel-poster"]).unwrap();
        assert_eq!(config.video_url, defaults::VIDEO_URL);
        assert_eq!(config.description, defaults::DESCRIPTION);
        assert_eq!(config.max_poll_attempts, defaults::MAX_POLL_ATTEMPTS);
        assert_eq!(config.poll_interval_secs, defaults::POLL_INTERVAL_SECS);
        assert_eq!(config.timeout_seconds, defaults::TIMEOUT_SECONDS);
        assert!(config.page_id.is_none());
    }

    #[test]
    fn test_config_file_conflicts_with_upload_flags() {
        let result = CliConfig::try_parse_from([
            "reel-poster",
            "--config",
            "reel.toml",
            "--video-url",
            "https://a.example.com/b.mp4",
        ]);
        assert!(result.is_err());

        let result =
            CliConfig::try_parse_from(["reel-poster", "--config", "reel.toml", "--page-id", "42"]);
        assert!(result.is_err());

        let config =
            CliConfig::try_parse_from(["reel-poster", "--config", "reel.toml", "--verbose"]).unwrap();
        assert_eq!(config.config.as_deref(), Some("reel.toml"));
        assert!(config.verbose);
    }
}

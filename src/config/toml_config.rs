use crate::config::{defaults, video};
use crate::core::ConfigProvider;
use crate::utils::error::{PosterError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub video: VideoConfig,
    pub graph: GraphConfig,
    pub auth: AuthConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoConfig {
    pub url: Option<String>,
    pub date: Option<String>, // 設定時覆蓋 url
    pub bucket: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    pub api_base: Option<String>,
    pub rupload_base: Option<String>,
    pub version: Option<String>,
    pub page_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub token_env: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadConfig {
    pub poll_interval_seconds: Option<u64>,
    pub max_poll_attempts: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| PosterError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        config.resolve()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${FACEBOOK_PAGE_ID})，找不到的保留原樣；
    /// 值會先轉義，放在 TOML 字串內才不會破壞語法
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PosterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => escape_toml_basic_string(&value),
                Err(_) => format!("${{{}}}", var_name),
            }
        });

        Ok(result.to_string())
    }

    fn resolve(&mut self) -> Result<()> {
        if let Some(date) = &self.video.date {
            let date = video::parse_date("video.date", date)?;
            let bucket = self
                .video
                .bucket
                .as_deref()
                .unwrap_or(defaults::VIDEO_BUCKET);
            self.video.url = Some(video::stitched_video_url(bucket, date));
        }

        if self.graph.page_id.is_none() {
            self.graph.page_id = defaults::page_id_from_env();
        }

        Ok(())
    }

    pub fn validate_config(&self) -> Result<()> {
        let fields = [
            ("video.url", self.video.url.as_deref()),
            ("graph.page_id", self.graph.page_id.as_deref()),
            ("graph.api_base", self.graph.api_base.as_deref()),
            ("auth.token_env", self.auth.token_env.as_deref()),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if value.contains("${") {
                    return Err(PosterError::ConfigValidationError {
                        field: field.to_string(),
                        message: format!("unresolved environment variable in '{}'", value),
                    });
                }
            }
        }

        super::validate_provider(self)
    }
}

fn escape_toml_basic_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl ConfigProvider for TomlConfig {
    fn video_url(&self) -> &str {
        self.video.url.as_deref().unwrap_or(defaults::VIDEO_URL)
    }

    fn description(&self) -> &str {
        self.video
            .description
            .as_deref()
            .unwrap_or(defaults::DESCRIPTION)
    }

    fn token_env(&self) -> &str {
        self.auth.token_env.as_deref().unwrap_or(defaults::TOKEN_ENV)
    }

    fn page_id(&self) -> &str {
        self.graph.page_id.as_deref().unwrap_or(defaults::PAGE_ID)
    }

    fn graph_api_base(&self) -> &str {
        self.graph
            .api_base
            .as_deref()
            .unwrap_or(defaults::GRAPH_API_BASE)
    }

    fn rupload_base(&self) -> &str {
        self.graph
            .rupload_base
            .as_deref()
            .unwrap_or(defaults::RUPLOAD_BASE)
    }

    fn api_version(&self) -> &str {
        self.graph.version.as_deref().unwrap_or(defaults::API_VERSION)
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_secs(
            self.upload
                .poll_interval_seconds
                .unwrap_or(defaults::POLL_INTERVAL_SECS),
        )
    }

    fn max_poll_attempts(&self) -> u32 {
        self.upload
            .max_poll_attempts
            .unwrap_or(defaults::MAX_POLL_ATTEMPTS)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.upload
                .timeout_seconds
                .unwrap_or(defaults::TIMEOUT_SECONDS),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

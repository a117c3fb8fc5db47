#[cfg(feature = "cli")]
pub mod cli;
pub mod defaults;
pub mod toml_config;
pub mod video;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// 兩種設定來源共用的檢查；access token 本身刻意不檢查
pub(crate) fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_url("video_url", config.video_url())?;
    validation::validate_url("graph_api_base", config.graph_api_base())?;
    validation::validate_url("rupload_base", config.rupload_base())?;
    validation::validate_api_version("api_version", config.api_version())?;
    validation::validate_env_var_name("token_env", config.token_env())?;
    validation::validate_non_empty_string("page_id", config.page_id())?;
    validation::validate_positive_number(
        "max_poll_attempts",
        u64::from(config.max_poll_attempts()),
        1,
    )?;
    validation::validate_range("timeout_seconds", config.request_timeout().as_secs(), 1, 3600)?;
    Ok(())
}

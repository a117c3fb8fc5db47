use crate::adapters::GraphReelUploader;
use crate::core::poster::Poster;
use crate::core::{ConfigProvider, UploadResult};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// 驗證設定後以 Graph API 上傳一次
pub async fn post_configured_reel<C: ConfigProvider + Validate>(config: &C) -> Result<UploadResult> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    tracing::debug!(
        "Graph API {} {}, page {}",
        config.graph_api_base(),
        config.api_version(),
        config.page_id()
    );

    let uploader = GraphReelUploader::from_config(config)?;
    let poster = Poster::from_config(uploader, config);
    poster.post_reel().await
}

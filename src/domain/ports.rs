use crate::domain::model::{ReelRequest, UploadResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 「上傳 Reel」能力，正式環境是 Graph API，測試時可替換
#[async_trait]
pub trait ReelUploader: Send + Sync {
    async fn upload_reel(&self, request: &ReelRequest) -> Result<UploadResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn video_url(&self) -> &str;
    fn description(&self) -> &str;
    fn token_env(&self) -> &str;
    fn page_id(&self) -> &str;
    fn graph_api_base(&self) -> &str;
    fn rupload_base(&self) -> &str;
    fn api_version(&self) -> &str;
    fn poll_interval(&self) -> Duration;
    fn max_poll_attempts(&self) -> u32;
    fn request_timeout(&self) -> Duration;
}

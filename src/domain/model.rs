use serde::{Deserialize, Serialize};
use std::fmt;

/// 一次上傳所需的三個值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelRequest {
    pub url: String,
    /// 未設定環境變數時為 None，序列化時省略
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub video_id: String,
    pub success: bool,
    pub post_id: Option<String>,
}

impl fmt::Display for UploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ video_id: {}, success: {}", self.video_id, self.success)?;
        if let Some(post_id) = &self.post_id {
            write!(f, ", post_id: {}", post_id)?;
        }
        write!(f, " }}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoStatus {
    Processing,
    Ready,
    Error,
    Other(String),
}

impl VideoStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "ready" => VideoStatus::Ready,
            "processing" | "upload_complete" | "uploading" => VideoStatus::Processing,
            "error" => VideoStatus::Error,
            other => VideoStatus::Other(other.to_string()),
        }
    }
}

use crate::core::{ConfigProvider, ReelRequest, ReelUploader, UploadResult};
use crate::utils::error::Result;

pub struct Poster<U: ReelUploader> {
    uploader: U,
    video_url: String,
    description: String,
    token_env: String,
}

impl<U: ReelUploader> Poster<U> {
    pub fn new(uploader: U, video_url: String, description: String, token_env: String) -> Self {
        Self {
            uploader,
            video_url,
            description,
            token_env,
        }
    }

    pub fn from_config<C: ConfigProvider>(uploader: U, config: &C) -> Self {
        Self::new(
            uploader,
            config.video_url().to_string(),
            config.description().to_string(),
            config.token_env().to_string(),
        )
    }

    /// 每次呼叫都重新讀取環境變數，不做任何驗證
    pub fn build_request(&self) -> ReelRequest {
        ReelRequest {
            url: self.video_url.clone(),
            access_token: std::env::var(&self.token_env).ok(),
            description: self.description.clone(),
        }
    }

    pub async fn post_reel(&self) -> Result<UploadResult> {
        let request = self.build_request();
        if request.access_token.is_none() {
            tracing::debug!("{} is not set, uploading without a token", self.token_env);
        }

        tracing::info!("Uploading reel...");
        tracing::debug!("Video URL: {}", request.url);

        match self.uploader.upload_reel(&request).await {
            Ok(result) => {
                tracing::info!("{}", success_message(&result));
                Ok(result)
            }
            Err(e) => {
                tracing::error!("❌ Error: {:?}", e);
                Err(e)
            }
        }
    }
}

pub fn success_message(result: &UploadResult) -> String {
    format!("✅ Reel posted successfully! {}", result)
}

/// 任何錯誤一律回傳 1，不區分錯誤種類
pub fn exit_code<T>(outcome: &Result<T>) -> i32 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

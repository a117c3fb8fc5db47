use crate::core::{ConfigProvider, ReelRequest, ReelUploader, UploadResult, VideoStatus};
use crate::utils::error::{PosterError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GraphSettings {
    pub graph_api_base: String,
    pub rupload_base: String,
    pub api_version: String,
    pub page_id: String,
    pub poll_interval: Duration,
    pub max_poll_attempts: u32,
    pub request_timeout: Duration,
}

impl GraphSettings {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            graph_api_base: config.graph_api_base().to_string(),
            rupload_base: config.rupload_base().to_string(),
            api_version: config.api_version().to_string(),
            page_id: config.page_id().to_string(),
            poll_interval: config.poll_interval(),
            max_poll_attempts: config.max_poll_attempts(),
            request_timeout: config.request_timeout(),
        }
    }
}

impl Default for GraphSettings {
    fn default() -> Self {
        use crate::config::defaults;

        Self {
            graph_api_base: defaults::GRAPH_API_BASE.to_string(),
            rupload_base: defaults::RUPLOAD_BASE.to_string(),
            api_version: defaults::API_VERSION.to_string(),
            page_id: defaults::PAGE_ID.to_string(),
            poll_interval: Duration::from_secs(defaults::POLL_INTERVAL_SECS),
            max_poll_attempts: defaults::MAX_POLL_ATTEMPTS,
            request_timeout: Duration::from_secs(defaults::TIMEOUT_SECONDS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StartResponse {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct RuploadResponse {
    success: bool,
    debug_info: Option<RuploadDebugInfo>,
}

#[derive(Debug, Deserialize)]
struct RuploadDebugInfo {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: Option<StatusBody>,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    video_status: Option<String>,
    processing_phase: Option<PhaseBody>,
}

#[derive(Debug, Deserialize)]
struct PhaseBody {
    status: Option<String>,
    error: Option<PhaseError>,
}

#[derive(Debug, Deserialize)]
struct PhaseError {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FinishResponse {
    success: bool,
    post_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorEnvelope {
    error: GraphErrorBody,
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    message: String,
    r#type: Option<String>,
    code: Option<i64>,
}

/// Graph API 的 Reels 發佈流程：start → rupload (file_url) → 等待處理 → finish
pub struct GraphReelUploader {
    client: Client,
    settings: GraphSettings,
}

impl GraphReelUploader {
    pub fn new(settings: GraphSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(GraphSettings::from_config(config))
    }

    fn graph_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.settings.graph_api_base.trim_end_matches('/'),
            self.settings.api_version,
            path
        )
    }

    fn reels_url(&self) -> String {
        self.graph_url(&format!("{}/video_reels", self.settings.page_id))
    }

    fn rupload_url(&self, video_id: &str) -> String {
        format!(
            "{}/video-upload/{}/{}",
            self.settings.rupload_base.trim_end_matches('/'),
            self.settings.api_version,
            video_id
        )
    }

    async fn start_session(&self, token: Option<&str>) -> Result<String> {
        let params = with_token(vec![("upload_phase", "start".to_string())], token);

        tracing::debug!("Initializing upload session: {}", self.reels_url());
        let response = self
            .client
            .post(self.reels_url())
            .query(&params)
            .send()
            .await?;

        let start: StartResponse = parse_response(response).await?;
        tracing::info!("Upload session started, video id {}", start.video_id);
        Ok(start.video_id)
    }

    async fn upload_hosted_file(
        &self,
        video_id: &str,
        file_url: &str,
        token: Option<&str>,
    ) -> Result<()> {
        tracing::debug!("Uploading hosted file {} to {}", file_url, video_id);
        let response = self
            .client
            .post(self.rupload_url(video_id))
            .header("Authorization", format!("OAuth {}", token.unwrap_or_default()))
            .header("file_url", file_url)
            .send()
            .await?;

        let upload: RuploadResponse = parse_response(response).await?;
        if !upload.success {
            let message = upload
                .debug_info
                .and_then(|info| info.message)
                .unwrap_or_else(|| "upload endpoint returned success=false".to_string());
            return Err(PosterError::UploadRejected { message });
        }

        tracing::info!("Video upload accepted");
        Ok(())
    }

    async fn fetch_status(&self, video_id: &str, token: Option<&str>) -> Result<StatusBody> {
        let params = with_token(vec![("fields", "status".to_string())], token);
        let response = self
            .client
            .get(self.graph_url(video_id))
            .query(&params)
            .send()
            .await?;

        let status: StatusResponse = parse_response(response).await?;
        Ok(status.status.unwrap_or(StatusBody {
            video_status: None,
            processing_phase: None,
        }))
    }

    async fn wait_for_processing(&self, video_id: &str, token: Option<&str>) -> Result<()> {
        let max_attempts = self.settings.max_poll_attempts;

        for attempt in 1..=max_attempts {
            let body = self.fetch_status(video_id, token).await?;
            let video_status = VideoStatus::parse(body.video_status.as_deref().unwrap_or(""));
            let phase_status = body
                .processing_phase
                .as_ref()
                .and_then(|phase| phase.status.clone())
                .unwrap_or_default();

            if video_status == VideoStatus::Ready || phase_status == "complete" {
                tracing::info!("Video processing complete");
                return Ok(());
            }

            if video_status == VideoStatus::Error {
                let message = body
                    .processing_phase
                    .and_then(|phase| phase.error)
                    .and_then(|error| error.message)
                    .unwrap_or_else(|| "Unknown error".to_string());
                return Err(PosterError::ProcessingError { message });
            }

            tracing::info!(
                "Video status: {:?}, processing: {} ({}/{}). Waiting...",
                video_status,
                phase_status,
                attempt,
                max_attempts
            );

            if attempt < max_attempts {
                tokio::time::sleep(self.settings.poll_interval).await;
            }
        }

        Err(PosterError::ProcessingTimeout {
            attempts: max_attempts,
        })
    }

    async fn publish(
        &self,
        video_id: &str,
        description: &str,
        token: Option<&str>,
    ) -> Result<FinishResponse> {
        let params = with_token(
            vec![
                ("upload_phase", "finish".to_string()),
                ("video_state", "PUBLISHED".to_string()),
                ("video_id", video_id.to_string()),
                ("description", description.to_string()),
            ],
            token,
        );

        let response = self
            .client
            .post(self.reels_url())
            .query(&params)
            .send()
            .await?;

        let finish: FinishResponse = parse_response(response).await?;
        if !finish.success {
            return Err(PosterError::UploadRejected {
                message: format!("publishing video {} returned success=false", video_id),
            });
        }
        Ok(finish)
    }
}

#[async_trait]
impl ReelUploader for GraphReelUploader {
    async fn upload_reel(&self, request: &ReelRequest) -> Result<UploadResult> {
        let token = request.access_token.as_deref();

        let video_id = self.start_session(token).await?;
        self.upload_hosted_file(&video_id, &request.url, token)
            .await?;
        self.wait_for_processing(&video_id, token).await?;
        let finish = self.publish(&video_id, &request.description, token).await?;

        Ok(UploadResult {
            video_id,
            success: finish.success,
            post_id: finish.post_id,
        })
    }
}

/// token 為 None 時不帶 access_token 參數
fn with_token(
    mut params: Vec<(&'static str, String)>,
    token: Option<&str>,
) -> Vec<(&'static str, String)> {
    if let Some(token) = token {
        params.push(("access_token", token.to_string()));
    }
    params
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    tracing::debug!("Graph API response status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(graph_error(status.as_u16(), &body));
    }

    Ok(response.json::<T>().await?)
}

fn graph_error(status: u16, body: &str) -> PosterError {
    match serde_json::from_str::<GraphErrorEnvelope>(body) {
        Ok(envelope) => {
            if let Some(kind) = &envelope.error.r#type {
                tracing::debug!("Graph API error type: {}", kind);
            }
            PosterError::GraphApiError {
                status,
                code: envelope.error.code,
                message: envelope.error.message,
            }
        }
        Err(_) => PosterError::GraphApiError {
            status,
            code: None,
            message: if body.trim().is_empty() {
                "empty response body".to_string()
            } else {
                body.trim().to_string()
            },
        },
    }
}

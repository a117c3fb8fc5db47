use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosterError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Graph API error (HTTP {status}, code {code:?}): {message}")]
    GraphApiError {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Video upload rejected: {message}")]
    UploadRejected { message: String },

    #[error("Video processing error: {message}")]
    ProcessingError { message: String },

    #[error("Video processing timed out after {attempts} status checks")]
    ProcessingTimeout { attempts: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Processing,
    Configuration,
    System,
}

impl PosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PosterError::HttpError(_) => ErrorCategory::Network,
            PosterError::GraphApiError { .. } | PosterError::UploadRejected { .. } => {
                ErrorCategory::Remote
            }
            PosterError::ProcessingError { .. } | PosterError::ProcessingTimeout { .. } => {
                ErrorCategory::Processing
            }
            PosterError::ConfigError { .. }
            | PosterError::InvalidConfigValueError { .. }
            | PosterError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            PosterError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PosterError::HttpError(e) if e.is_timeout() => {
                "Request to Facebook timed out".to_string()
            }
            PosterError::HttpError(_) => "Could not reach Facebook".to_string(),
            PosterError::GraphApiError { message, .. } => {
                format!("Facebook rejected the request: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PosterError::HttpError(_) => "Check network connectivity and try again",
            PosterError::GraphApiError {
                code: Some(190), ..
            } => "The access token is invalid or expired; generate a new one",
            PosterError::GraphApiError { status: 401, .. }
            | PosterError::GraphApiError { status: 403, .. } => {
                "Check that the access token is set and has pages_manage_posts permission"
            }
            PosterError::GraphApiError { .. } | PosterError::UploadRejected { .. } => {
                "Check the video URL is publicly reachable and the page id is correct"
            }
            PosterError::ProcessingError { .. } => {
                "Check the video meets Reels requirements (vertical, 3-90 seconds)"
            }
            PosterError::ProcessingTimeout { .. } => {
                "Increase --max-poll-attempts or check the video in Creator Studio"
            }
            PosterError::ConfigError { .. }
            | PosterError::InvalidConfigValueError { .. }
            | PosterError::ConfigValidationError { .. } => {
                "Fix the configuration value and run again"
            }
            PosterError::IoError(_) => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, PosterError>;

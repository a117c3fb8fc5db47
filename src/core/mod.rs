pub mod poster;

pub use crate::domain::model::{ReelRequest, UploadResult, VideoStatus};
pub use crate::domain::ports::{ConfigProvider, ReelUploader};
pub use crate::utils::error::Result;

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{GraphReelUploader, GraphSettings};
pub use app::post_configured_reel;
pub use config::TomlConfig;
pub use core::poster::{exit_code, success_message, Poster};
pub use domain::model::{ReelRequest, UploadResult};
pub use domain::ports::ReelUploader;
pub use utils::error::{PosterError, Result};

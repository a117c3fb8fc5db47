pub const VIDEO_URL: &str =
    "https://storage.googleapis.com/bebop_data/videos/2025-05-29/stitched/stitched_reel_2025-05-29.mp4";
pub const DESCRIPTION: &str = "Today's Music Discoveries! 🎵 #NewMusic #MusicDiscovery";
pub const VIDEO_BUCKET: &str = "bebop_data";

pub const TOKEN_ENV: &str = "FACEBOOK_ACCESS_TOKEN";
pub const PAGE_ID_ENV: &str = "FACEBOOK_PAGE_ID";
/// 沒有指定頁面時，Graph API 以 token 所屬的頁面為準
pub const PAGE_ID: &str = "me";

pub const GRAPH_API_BASE: &str = "https://graph.facebook.com";
pub const RUPLOAD_BASE: &str = "https://rupload.facebook.com";
pub const API_VERSION: &str = "v23.0";

pub const POLL_INTERVAL_SECS: u64 = 5;
pub const MAX_POLL_ATTEMPTS: u32 = 60;
pub const TIMEOUT_SECONDS: u64 = 60;

/// 未指定時從 `FACEBOOK_PAGE_ID` 讀取
pub fn page_id_from_env() -> Option<String> {
    std::env::var(PAGE_ID_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

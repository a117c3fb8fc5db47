use crate::utils::error::{PosterError, Result};
use chrono::{Local, NaiveDate};

/// 每日剪輯好的影片存放位置
pub fn stitched_video_url(bucket: &str, date: NaiveDate) -> String {
    let day = date.format("%Y-%m-%d");
    format!(
        "https://storage.googleapis.com/{}/videos/{}/stitched/stitched_reel_{}.mp4",
        bucket, day, day
    )
}

/// 接受 `YYYY-MM-DD` 或 `today`
pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    if value.trim().eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }

    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        PosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected YYYY-MM-DD or 'today': {}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;

    #[test]
    fn test_default_url_matches_stitched_layout() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 29).unwrap();
        assert_eq!(
            stitched_video_url(defaults::VIDEO_BUCKET, date),
            defaults::VIDEO_URL
        );
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("video.date", "2025-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        assert_eq!(
            parse_date("video.date", "today").unwrap(),
            Local::now().date_naive()
        );
        assert!(parse_date("video.date", "06/01/2025").is_err());
    }
}

use crate::utils::error::{PosterError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PosterError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Graph API 版本格式，例如 `v23.0`
pub fn validate_api_version(field_name: &str, version: &str) -> Result<()> {
    let re = regex::Regex::new(r"^v\d+\.\d+$").map_err(|e| PosterError::ConfigError {
        message: format!("Invalid version pattern: {}", e),
    })?;

    if !re.is_match(version) {
        return Err(PosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: version.to_string(),
            reason: "Expected a Graph API version like v23.0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_env_var_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('=') || name.contains('\0') {
        return Err(PosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Environment variable names cannot contain '=' or null bytes".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("video.url", "https://example.com/reel.mp4").is_ok());
        assert!(validate_url("video.url", "http://example.com").is_ok());
        assert!(validate_url("video.url", "").is_err());
        assert!(validate_url("video.url", "invalid-url").is_err());
        assert!(validate_url("video.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_api_version() {
        assert!(validate_api_version("graph.version", "v23.0").is_ok());
        assert!(validate_api_version("graph.version", "v18.0").is_ok());
        assert!(validate_api_version("graph.version", "23.0").is_err());
        assert!(validate_api_version("graph.version", "latest").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("upload.max_poll_attempts", 5, 1).is_ok());
        assert!(validate_positive_number("upload.max_poll_attempts", 0, 1).is_err());
    }

    #[test]
    fn test_validate_env_var_name() {
        assert!(validate_env_var_name("auth.token_env", "FACEBOOK_ACCESS_TOKEN").is_ok());
        assert!(validate_env_var_name("auth.token_env", "  ").is_err());
        assert!(validate_env_var_name("auth.token_env", "A=B").is_err());
    }
}

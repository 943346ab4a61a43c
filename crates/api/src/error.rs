use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unauthorized")]
    Unauthorized,
    #[error("rate limited")]
    RateLimited { retry_after: Option<u64> },
    #[error("{0}")]
    Backend(String),
    #[error("upload rejected: {0}")]
    Upload(String),
}

/// Pulls a retry-after duration in seconds out of a backend error message.
/// The backend phrases it as free text ("Too many attempts, retry after 90
/// seconds"), so this takes the first integer that follows the word "retry".
pub fn retry_after_seconds(message: &str) -> Option<u64> {
    let lower = message.to_lowercase();
    let tail = &lower[lower.find("retry")? + "retry".len()..];
    let digits: String = tail
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// `m:ss` countdown string shown under the login form while rate limited.
pub fn format_retry_countdown(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed with status code: {status_code}")]
    RequestFailed { status_code: reqwest::StatusCode },

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

use serde_json::Value;
use thiserror::Error;

/// Error surfaced by the API itself through a JSON:API `errors` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP {status} {title} {detail}")]
pub struct ApiError {
    pub title: String,
    pub detail: String,
    pub code: u32,
    pub status: u16,
}

impl ApiError {
    /// Reads `errors[0]` from a response body.
    ///
    /// Returns `None` when the body is not an error envelope. Kitsu sends
    /// `code` and `status` as strings; when one of them does not parse it
    /// falls back to the other, then to `fallback_status`, then to 0.
    #[must_use]
    pub fn from_envelope(body: &Value, fallback_status: Option<u16>) -> Option<Self> {
        let first = body.get("errors")?.as_array()?.first()?;

        let text = |key: &str| {
            first
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let number = |key: &str| -> Option<u64> {
            match first.get(key)? {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }
        };

        let raw_status = number("status").and_then(|s| u16::try_from(s).ok());
        let raw_code = number("code").and_then(|c| u32::try_from(c).ok());

        let status = raw_status
            .or_else(|| raw_code.and_then(|c| u16::try_from(c).ok()))
            .or(fallback_status)
            .unwrap_or(0);
        let code = raw_code.unwrap_or(u32::from(status));

        Some(Self {
            title: text("title"),
            detail: text("detail"),
            code,
            status,
        })
    }
}

/// A document that does not have the shape the chosen decode path needs.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("document has no primary data")]
    MissingData,

    #[error("expected {expected} as primary data")]
    UnexpectedShape { expected: &'static str },

    #[error("document is missing `{0}`")]
    MissingField(&'static str),

    #[error("cannot pair {left} ({left_len}) with {right} ({right_len}): lengths differ")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum KitsuError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Kitsu API error: {0}")]
    Api(ApiError),

    #[error("Kitsu returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl From<ApiError> for KitsuError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

impl KitsuError {
    /// The upstream error, when the API answered with an error envelope.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, KitsuError>;

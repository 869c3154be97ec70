use thiserror::Error;

/// Failure talking to the dogtrails API, from either transport.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status. The body is not read.
    #[error("{status_text}")]
    Status { status: u16, status_text: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("response parse failed: {0}")]
    Decode(String),

    #[error("client setup failed: {0}")]
    Config(String),
}

impl ApiError {
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        let status_text = status_text.into();
        let status_text = if status_text.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            status_text
        };
        Self::Status {
            status,
            status_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_status_text_only() {
        let err = ApiError::status(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[test]
    fn blank_status_text_falls_back_to_code() {
        let err = ApiError::status(503, "");
        assert_eq!(err.to_string(), "HTTP 503");
    }
}

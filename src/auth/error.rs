use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// A browser-only operation ran without a navigation capability.
    #[error("{0} can only be called in the browser")]
    Environment(&'static str),
    #[error("invalid callback URL {url:?}: {reason}")]
    InvalidCallbackUrl { url: String, reason: String },
    #[error("config error: {0}")]
    Config(String),
    #[error("unable to reach the auth service: {0}")]
    Network(String),
    #[error("request to the auth service timed out")]
    Timeout,
    #[error("auth service responded with {status}")]
    Http { status: u16 },
    #[error("failed to decode auth service response: {0}")]
    Decode(String),
}

impl AuthError {
    pub(crate) fn from_request(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AuthError;

    #[test]
    fn environment_error_names_the_operation() {
        let err = AuthError::Environment("sign_in");
        assert_eq!(err.to_string(), "sign_in can only be called in the browser");
    }

    #[test]
    fn http_error_reports_status() {
        let err = AuthError::Http { status: 503 };
        assert_eq!(err.to_string(), "auth service responded with 503");
    }
}

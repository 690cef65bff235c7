use super::response::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Status code {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid response")]
    InvalidResponse,
}

impl Error {
    /// Builds an API error from a non-success response body, preferring the
    /// `message` field Kong puts in its JSON errors.
    pub fn api(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| body.to_string());
        Error::Api { status, message }
    }

    pub fn missing(argument: &str, operation: &str) -> Self {
        Error::MissingArgument(format!(
            "{} cannot be empty for {} operation",
            argument, operation
        ))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

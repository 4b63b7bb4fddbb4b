pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raised locally, before any request leaves the client.
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Could not build request: {0}")]
    RequestConstruction(String),
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a status outside `200..=206`. `message` is the
    /// raw response body, untouched.
    #[error("Engage API error - Code: {code} | Message: {message}")]
    Api { code: u16, message: String },
    #[error("Could not decode response body: {0}")]
    Deserialization(serde_json::Error),
    #[error("Could not encode request body: {0}")]
    Serialization(serde_json::Error),
}

impl Error {
    pub(crate) fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// The HTTP status of an [`Error::Api`], `None` for every other kind.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

use thiserror::Error;

/// Omneuro Errors
#[derive(Debug, Error)]
pub enum OmneuroError {
    #[error("OPENAI_API_KEY not set. Export it or put it in a .env file.")]
    MissingApiKey,
    #[error("Request to the completion service failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Completion service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Completion service returned no message content.")]
    EmptyResponse,
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

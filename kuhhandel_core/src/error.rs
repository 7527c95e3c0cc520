use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Inbound text does not fit the `{type, payload}` schema.
    #[error("malformed message: {0}")]
    MalformedMessage(#[source] serde_json::Error),

    /// An outbound intent could not be serialized.
    #[error("could not encode intent: {0}")]
    Encode(#[source] serde_json::Error),

    /// The connection is not open, so the frame was dropped.
    #[error("transport unavailable: {0}")]
    TransportUnavailable(String),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

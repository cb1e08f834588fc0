use thiserror::Error;

/// Failures of the share-token codec.
///
/// Decoding collapses every sub-cause (bad base64, corrupt stream, invalid
/// structure) into [`CodecError::Decode`]; the message is for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("failed to encode share data: {0}")]
    Encode(String),

    #[error("failed to decode share data: {0}")]
    Decode(String),
}

pub type CodecResult<T> = Result<T, CodecError>;

impl CodecError {
    pub fn is_decode(&self) -> bool {
        matches!(self, CodecError::Decode(_))
    }
}

impl From<CodecError> for String {
    fn from(err: CodecError) -> Self {
        err.to_string()
    }
}

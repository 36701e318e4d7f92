use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffError>;

#[derive(Debug, Error)]
pub enum HuffError {
    /// The input decoded to zero symbols. Nothing is written.
    #[error("input contains no symbols to compress")]
    EmptyInput,

    #[error("malformed artifact: {0}")]
    MalformedArtifact(String),

    /// The packed bits cannot have been produced from the artifact's frequency table.
    #[error("decoding inconsistency: {0}")]
    DecodingInconsistency(String),

    #[error("invalid text: {0}")]
    InvalidText(String),

    /// An encoding name that is not one of `Encoding::NAMES`.
    #[error("unknown text encoding '{0}'")]
    UnknownEncoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("binary stream error: {0}")]
    Binary(#[from] binary_rw::BinaryError),
}

impl HuffError {
    pub fn malformed(message: impl Into<String>) -> Self {
        HuffError::MalformedArtifact(message.into())
    }

    pub fn inconsistent(message: impl Into<String>) -> Self {
        HuffError::DecodingInconsistency(message.into())
    }

    pub fn invalid_text(message: impl Into<String>) -> Self {
        HuffError::InvalidText(message.into())
    }
}

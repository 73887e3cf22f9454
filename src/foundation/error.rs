/// Convenience result type used across protoviz.
pub type ProtovizResult<T> = Result<T, ProtovizError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ProtovizError {
    /// Invalid user-provided, configuration or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A protocol id that is not present in the registry.
    #[error("unknown protocol '{0}'")]
    UnknownProtocol(String),

    /// Rejected sequencer command.
    #[error("sequencer error: {0}")]
    Sequencer(String),

    /// Errors while producing or rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while exporting the simulation log or writing output files.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProtovizError {
    /// Build a [`ProtovizError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProtovizError::UnknownProtocol`] value.
    pub fn unknown_protocol(id: impl Into<String>) -> Self {
        Self::UnknownProtocol(id.into())
    }

    /// Build a [`ProtovizError::Sequencer`] value.
    pub fn sequencer(msg: impl Into<String>) -> Self {
        Self::Sequencer(msg.into())
    }

    /// Build a [`ProtovizError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ProtovizError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`ProtovizError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ProtovizError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

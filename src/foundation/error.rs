/// Convenience result type used across pushfx.
pub type PushfxResult<T> = Result<T, PushfxError>;

/// Required transition input that can be absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// The image the transition starts from.
    SourceImage,
    /// The image the transition ends on.
    DestinationImage,
    /// The viewport rectangle.
    Extent,
}

impl InputKey {
    /// Stable lowercase name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::SourceImage => "source_image",
            Self::DestinationImage => "destination_image",
            Self::Extent => "extent",
        }
    }
}

impl std::fmt::Display for InputKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum PushfxError {
    /// A required filter input is absent (or unusable, for the extent).
    #[error("missing input: {0}")]
    MissingInput(InputKey),

    /// Invalid user-provided configuration or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing an image graph.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PushfxError {
    /// Build a [`PushfxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PushfxError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PushfxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

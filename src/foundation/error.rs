use std::path::PathBuf;

/// Convenience result type used across lessoncard.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by report APIs.
///
/// Most rendering problems never surface through this type: missing fields, unreadable
/// images and unavailable fonts are degraded and logged. Only failures that leave the
/// caller without a usable artifact are returned.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid caller-provided data or API misuse.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or rasterizing the canvas.
    #[error("render error: {0}")]
    Render(String),

    /// Font data could not be loaded or shaped.
    #[error("font error: {0}")]
    Font(String),

    /// An image resource could not be decoded or composited.
    #[error("image error: {0}")]
    Image(String),

    /// Upstream model output that does not match the assessment contract.
    #[error("malformed upstream output: {reason}")]
    Upstream {
        /// What made the output unusable.
        reason: String,
        /// The raw text exactly as received.
        raw: String,
    },

    /// The finished report could not be written.
    #[error("failed to write report '{}': {message}", path.display())]
    Output {
        /// Destination that was attempted.
        path: PathBuf,
        /// Underlying failure description.
        message: String,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`CardError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`CardError::Upstream`] value carrying the raw model text.
    pub fn upstream(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Upstream {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    /// Build a [`CardError::Output`] value.
    pub fn output(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across the crate.
pub type ReelResult<T> = Result<T, ReelError>;

/// Error taxonomy for building, realizing and evaluating a reel.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid element parameters, content or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Layout request that cannot be satisfied (unknown element, empty group, ...).
    #[error("layout error: {0}")]
    Layout(String),

    /// Directive the engine cannot realize.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while sampling the timeline for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

//! Error types for the glyph script pipeline
//!
//! Segmentation errors are user-visible validation failures. Layout errors
//! indicate a broken internal contract. Asset errors are recovered by the
//! compositor one decoration at a time and never abort a render.

use thiserror::Error;

/// Top-level pipeline error type
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The text cannot be split into glyph groups
    #[error(transparent)]
    Segment(#[from] SegmentError),

    /// Internal layout contract broken (indicates a bug)
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The finished canvas could not be encoded
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Validation failures raised while splitting normalized text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Text yields zero glyph groups
    #[error("Nothing to write: enter at least one letter or punctuation mark")]
    EmptyInput,

    /// A run of vowels cannot attach to any consonant
    #[error("Too many vowels in a row at position {position}: at most {max} can sit on each side of a consonant")]
    ClusterTooLong { position: usize, max: usize },
}

/// Internal layout contract violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Layout invariant violated at group {index}: {detail}")]
    InvariantViolation { index: usize, detail: String },
}

/// Symbol lookup failures
#[derive(Debug, Error)]
pub enum AssetError {
    /// No image is registered under this name
    #[error("Symbol not found: {name}")]
    NotFound { name: String },

    /// The image exists but could not be decoded
    #[error("Symbol '{name}' could not be decoded: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    /// The image file exists but could not be read
    #[error("Symbol '{name}' could not be read: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound { .. })
    }
}

/// Failures while serializing the finished canvas
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Failures while loading engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

//! Render-subsystem error type.

use thiserror::Error;

/// Errors produced while interpreting render settings.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown map layer {0:?}")]
    UnknownLayer(String),
}

//! Crate-level error types.

use std::fmt;

#[cfg(feature = "viewer")]
use crate::gpu::render_context::RenderContextError;

/// Errors produced by the foldscope crate.
#[derive(Debug)]
pub enum FoldError {
    /// GPU context initialization failure.
    #[cfg(feature = "viewer")]
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Option values that violate an invariant (e.g. inverted ranges).
    InvalidOptions(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "viewer")]
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for FoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "viewer")]
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<RenderContextError> for FoldError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for FoldError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

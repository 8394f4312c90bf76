//! Error types at the engine's boundary with its display collaborators.

use thiserror::Error;

/// Failure to provide a Display Surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("mount point `{0}` not found")]
    MountPointMissing(String),

    #[error("mount point is {available_w}x{available_h}, surface needs {needed_w}x{needed_h}")]
    TooSmall {
        needed_w: u32,
        needed_h: u32,
        available_w: u32,
        available_h: u32,
    },
}

/// Why [`crate::engine::PuzzleEngine::start`] refused to start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("failed to attach display surface: {0}")]
    Surface(#[from] SurfaceError),
}

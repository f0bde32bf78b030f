//! Startup failures
//!
//! Nothing can fail once the loop is running, so the only errors are the
//! ones that stop it from starting at all.

use thiserror::Error;

/// Fatal initialization error.
#[derive(Debug, Error)]
pub enum InitError {
    /// Canvas cannot fit the largest entity with its full circle on screen.
    #[error("canvas {width}x{height} is too small, need at least {min}x{min}")]
    CanvasTooSmall { width: f32, height: f32, min: f32 },
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// No element with the expected canvas id.
    #[error("no element with id `{0}`")]
    NoCanvas(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    /// DOM call failed while building the page
    #[error("dom error: {0}")]
    Dom(String),
    #[error("failed to create surface: {0}")]
    Surface(String),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(String),
    #[error("failed to create device: {0}")]
    Device(String),
}

use thiserror::Error;

/// Errors raised by the galaxy engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GalaxyError {
	/// Viewport dimensions are zero, negative or not finite.
	#[error("invalid bounds {width}x{height}: both dimensions must be positive")]
	InvalidBounds { width: f64, height: f64 },

	/// The drawing surface stopped accepting draw calls.
	#[error("render failure: {0}")]
	RenderFailure(String),

	/// The host refused to schedule the next frame.
	#[error("frame scheduling failed: {0}")]
	Scheduler(String),

	/// `open` was called while a previous activation is still running.
	#[error("galaxy view is already running")]
	AlreadyRunning,
}

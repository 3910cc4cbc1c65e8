/*! Error types for winsync operations. */

use super::WindowId;

/// Errors that can occur during winsync operations.
///
/// None of these are fatal: callers log them and fall back.
#[derive(Debug, thiserror::Error)]
pub enum WinsyncError {
  #[error("Window not found: {0}")]
  WindowNotFound(WindowId),

  #[error("Invalid value for parameter '{key}': {reason}")]
  InvalidConfig { key: String, reason: String },
}

/// Result type for winsync operations.
pub type WinsyncResult<T> = Result<T, WinsyncError>;

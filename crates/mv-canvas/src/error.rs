//! Canvas engine errors

use crate::window::WindowId;

/// Errors surfaced by canvas operations
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanvasError {
    /// The referenced window does not exist
    WindowNotFound(WindowId),
    /// A gesture is already in progress; only one session may exist
    GestureActive,
    /// The operation is not valid in the current state
    InvalidOperation {
        op: &'static str,
        reason: &'static str,
    },
}

impl std::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanvasError::WindowNotFound(id) => write!(f, "window {} not found", id),
            CanvasError::GestureActive => write!(f, "a gesture is already active"),
            CanvasError::InvalidOperation { op, reason } => {
                write!(f, "invalid operation {}: {}", op, reason)
            }
        }
    }
}

impl std::error::Error for CanvasError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CanvasError::WindowNotFound(7).to_string(),
            "window 7 not found"
        );
        assert_eq!(
            CanvasError::GestureActive.to_string(),
            "a gesture is already active"
        );
        let err = CanvasError::InvalidOperation {
            op: "confirm_close",
            reason: "no close was requested",
        };
        assert!(err.to_string().contains("confirm_close"));
    }
}

//! Error types for embed resolution
//!
//! Almost every failure in this crate degrades to a generic embed instead
//! of erroring; the only hard failure is a provider that refuses direct
//! URL paste and must be surfaced to the user.

/// Errors that can occur while resolving an embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The provider does not support this input form
    Unsupported {
        /// Stable provider tag
        provider: &'static str,
        /// User-facing explanation
        reason: &'static str,
    },
}

impl ResolveError {
    /// User-facing message for this error
    pub fn message(&self) -> String {
        match self {
            Self::Unsupported { reason, .. } => (*reason).to_string(),
        }
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { provider, reason } => {
                write!(f, "unsupported input for provider '{}': {}", provider, reason)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = ResolveError::Unsupported {
            provider: "rumble",
            reason: "paste the official embed code instead",
        };
        let text = err.to_string();
        assert!(text.contains("rumble"));
        assert!(text.contains("embed code"));
    }

    #[test]
    fn test_message_omits_provider_tag() {
        let err = ResolveError::Unsupported {
            provider: "rumble",
            reason: "paste the official embed code instead",
        };
        assert_eq!(err.message(), "paste the official embed code instead");
    }
}

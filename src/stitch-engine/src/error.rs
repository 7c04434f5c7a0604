//! Error types for edit operations.

use thiserror::Error;

use crate::strategy::Strategy;

/// Result type for edit operations.
pub type EditResult<T> = Result<T, EditError>;

/// Longest fragment preview echoed back in diagnostics, in characters.
const PREVIEW_MAX_CHARS: usize = 80;

/// Errors that can occur while locating and replacing a fragment.
///
/// All variants are terminal for the call: the engine never retries and
/// never produces a partially edited document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    /// The find and replace fragments are character-for-character
    /// identical (including the case where both are empty), so the edit
    /// could not change anything.
    #[error("the find and replace fragments are identical; the edit would change nothing")]
    IdenticalStrings,

    /// No strategy located the fragment anywhere in the document. The
    /// caller should retry with a fragment copied more literally from the
    /// document.
    #[error("could not find the fragment to replace: {fragment:?}")]
    NotFound {
        /// Truncated preview of the fragment that failed to match.
        fragment: String,
    },

    /// The winning strategy matched at more than one location and
    /// replace-all was not requested, so picking one would be a guess.
    #[error(
        "the fragment matched {count} locations ({strategy} matching); set replaceAll to change every occurrence, or enlarge the fragment until it is unique"
    )]
    AmbiguousMatch {
        /// Number of locations that matched.
        count: usize,
        /// The strategy that produced the matches.
        strategy: Strategy,
    },
}

impl EditError {
    /// Create a not-found error carrying a preview of the fragment.
    pub fn not_found(fragment: &str) -> Self {
        let mut preview: String = fragment.chars().take(PREVIEW_MAX_CHARS).collect();
        if fragment.chars().count() > PREVIEW_MAX_CHARS {
            preview.push('…');
        }
        Self::NotFound { fragment: preview }
    }

    /// Create an ambiguous-match error.
    pub fn ambiguous(count: usize, strategy: Strategy) -> Self {
        Self::AmbiguousMatch { count, strategy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditError::IdenticalStrings;
        assert!(err.to_string().contains("identical"));

        let err = EditError::not_found("missing text");
        assert!(err.to_string().contains("missing text"));

        let err = EditError::ambiguous(3, Strategy::Exact);
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains("exact"));
        assert!(err.to_string().contains("replaceAll"));
    }

    #[test]
    fn test_not_found_preview_is_truncated() {
        let long = "x".repeat(500);
        let err = EditError::not_found(&long);
        let EditError::NotFound { fragment } = &err else {
            panic!("expected NotFound");
        };
        assert!(fragment.chars().count() <= 81);
        assert!(fragment.ends_with('…'));
    }

    #[test]
    fn test_not_found_escapes_control_characters() {
        let err = EditError::not_found("a\nb");
        // Debug formatting keeps the diagnostic on one line.
        assert!(err.to_string().contains("a\\nb"));
    }
}

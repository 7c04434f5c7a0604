//! Validation, cascade selection and replacement application.

use crate::error::{EditError, EditResult};
use crate::span::MatchSpan;
use crate::strategy::Strategy;

/// A successful location: the spans to edit and the strategy that produced
/// them. Spans are non-overlapping and in ascending document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The strategy that won the cascade.
    pub strategy: Strategy,
    /// Every location the strategy matched.
    pub spans: Vec<MatchSpan>,
}

/// Locates `find` in `content` by walking the strategy cascade.
///
/// The first strategy producing at least one span wins; more permissive
/// strategies are never consulted once an earlier one succeeds, so the
/// most literal available interpretation of the fragment is always the one
/// used. Returns `None` when no strategy matches.
pub fn locate(content: &str, find: &str) -> Option<MatchResult> {
    for strategy in Strategy::CASCADE {
        let spans = strategy.find_matches(content, find);
        if !spans.is_empty() {
            tracing::debug!(%strategy, matches = spans.len(), "strategy matched");
            return Some(MatchResult { strategy, spans });
        }
    }
    None
}

/// Replaces `find` with `replacement` in `content`, returning the updated
/// document.
///
/// The engine is a pure function of its arguments: no state survives the
/// call, and on any error the document is conceptually untouched.
///
/// # Errors
///
/// - [`EditError::IdenticalStrings`] when `find == replacement`, checked
///   before any matching (this is why an empty/empty pair fails even
///   though an empty `find` is otherwise a valid insertion point).
/// - [`EditError::NotFound`] when no strategy matches.
/// - [`EditError::AmbiguousMatch`] when the winning strategy matched more
///   than once and `replace_all` is false.
pub fn replace(
    content: &str,
    find: &str,
    replacement: &str,
    replace_all: bool,
) -> EditResult<String> {
    if find == replacement {
        return Err(EditError::IdenticalStrings);
    }

    let Some(result) = locate(content, find) else {
        return Err(EditError::not_found(find));
    };

    if result.spans.len() > 1 && !replace_all {
        return Err(EditError::ambiguous(result.spans.len(), result.strategy));
    }

    Ok(apply(content, &result.spans, replacement))
}

/// Splices `replacement` into `content` at each span, in ascending order.
/// Text outside the spans is carried over byte-for-byte; the replacement is
/// inserted verbatim with no re-normalization, even when the match came
/// from a normalizing strategy.
fn apply(content: &str, spans: &[MatchSpan], replacement: &str) -> String {
    let mut out = String::with_capacity(content.len() + replacement.len());
    let mut cursor = 0;
    for span in spans {
        debug_assert!(
            span.start >= cursor,
            "spans must be non-overlapping and ascending"
        );
        out.push_str(&content[cursor..span.start]);
        out.push_str(replacement);
        cursor = span.end;
    }
    out.push_str(&content[cursor..]);
    out
}

//! Stitch Engine - cascading find/replace for agent-driven code edits.
//!
//! Callers of an automated editing tool rarely know the byte-exact
//! whitespace, indentation or escape-sequence spelling of the text they
//! want to change. Naive substring replacement fails too often to be
//! usable, while unrestricted fuzzy matching silently edits the wrong
//! place. This crate sits between the two: a fixed cascade of matching
//! strategies, each more permissive than the last, with the most literal
//! interpretation always preferred and ambiguous matches refused.
//!
//! The engine is a pure function of its inputs: no I/O, no caches, no
//! state between calls.
//!
//! # Example
//!
//! ```
//! use stitch_engine::replace;
//!
//! let content = "const   x    =     5;";
//! let updated = replace(content, "const x = 5;", "const x = 10;", false)?;
//! assert_eq!(updated, "const x = 10;");
//! # Ok::<(), stitch_engine::EditError>(())
//! ```

mod error;
mod replace;
mod span;
mod strategy;

pub use error::{EditError, EditResult};
pub use replace::{MatchResult, locate, replace};
pub use span::MatchSpan;
pub use strategy::Strategy;

//! Syntax highlighting, delegated to an external library.
//!
//! | Call | Used by |
//! |---|---|
//! | **Document** | per-theme pages: highlight every `<pre>` and embed the theme CSS |
//! | **Fragment** | the combined page: `<pre>` markup and CSS kept apart |
//!
//! The module is split into:
//! - **Backend**: [`Highlighter`] trait + [`Fragment`] + [`HighlightError`]
//! - **Syntect backend**: [`SyntectHighlighter`], the production implementation
//! - **Splice**: pure string helpers for locating and replacing `<pre>` blocks

pub mod backend;
mod splice;
pub mod syntect_backend;

pub use backend::{Fragment, HighlightError, Highlighter, WRAPPER_CLASS};
pub use syntect_backend::SyntectHighlighter;

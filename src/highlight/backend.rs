//! Highlighter trait and shared types.
//!
//! The [`Highlighter`] trait defines the two calls the gallery makes into a
//! highlighting library: render a whole HTML document, and render a single
//! fragment with its stylesheet kept separate.
//!
//! The production implementation is
//! [`SyntectHighlighter`](super::syntect_backend::SyntectHighlighter).

use thiserror::Error;

/// Class on the `<pre>` element of every fragment. All fragment CSS rules are
/// scoped under it.
pub const WRAPPER_CLASS: &str = "chroma";

#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("highlighting failed: {0}")]
    Syntect(#[from] syntect::Error),
}

/// Highlighted markup with its stylesheet kept separate.
///
/// `html` is a `<pre class="chroma">` block whose tokens are `<span>`s with a
/// single class each; `css` holds one rule per class, plus a rule for the
/// wrapper class itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub css: String,
}

/// Trait for highlighting libraries.
pub trait Highlighter {
    /// Highlight every `<pre>` block of `input` with `theme` and return the
    /// complete document, with the theme's stylesheet embedded in `<head>`.
    fn render_document(&self, input: &str, theme: &str) -> Result<String, HighlightError>;

    /// Highlight `code` with `theme`, returning markup and CSS separately.
    fn render_fragment(
        &self,
        code: &str,
        theme: &str,
        line_numbers: bool,
    ) -> Result<Fragment, HighlightError>;
}

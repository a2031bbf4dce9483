//! The built-in theme list and the navigation order it defines.
//!
//! Theme names are opaque slugs understood by the highlighter
//! (see [`crate::highlight::SyntectHighlighter::available_themes`]). The
//! order of [`DEFAULT_THEMES`] is significant: it is the order of the index
//! page, of the combined page, and of the Prev/Next buttons on each theme page.

/// Themes rendered when the config file does not override `themes`.
pub const DEFAULT_THEMES: &[&str] = &[
    "1337",
    "base16-eighties-dark",
    "base16-mocha-dark",
    "base16-ocean-dark",
    "base16-ocean-light",
    "coldark-cold",
    "coldark-dark",
    "dark-neon",
    "dracula",
    "github",
    "gruvbox-dark",
    "gruvbox-light",
    "inspired-github",
    "monokai-extended",
    "monokai-extended-bright",
    "monokai-extended-light",
    "monokai-extended-origin",
    "nord",
    "one-half-dark",
    "one-half-light",
    "solarized-dark",
    "solarized-light",
    "sublime-snazzy",
    "two-dark",
    "zenburn",
];

/// The themes on either side of a theme in the gallery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub prev: Option<&'a str>,
    pub next: Option<&'a str>,
}

/// Look up the neighbors of `themes[index]`.
///
/// The first theme has no `prev` and the last has no `next`; there is no
/// wrap-around.
pub fn neighbors<S: AsRef<str>>(themes: &[S], index: usize) -> Neighbors<'_> {
    let prev = index
        .checked_sub(1)
        .and_then(|i| themes.get(i))
        .map(AsRef::as_ref);
    let next = themes.get(index + 1).map(AsRef::as_ref);
    Neighbors { prev, next }
}

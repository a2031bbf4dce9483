//! # Theme Gallery
//!
//! A static HTML gallery of syntax highlighting themes. One sample snippet is
//! rendered in every theme of a fixed, ordered list; the result is a set of
//! plain HTML files you can open from disk or drop on any file server.
//!
//! # Architecture
//!
//! A single pass, no intermediate manifests:
//!
//! ```text
//! gallery.toml (optional)  →  GalleryConfig  →  generate  →  <output>/*.html
//!                                                  ↑
//!                                             Highlighter
//! ```
//!
//! Highlighting sits behind the [`highlight::Highlighter`] trait so page
//! generation can be tested against a mock without touching syntect.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`themes`] | The built-in theme list and Prev/Next neighbor lookup |
//! | [`config`] | Optional `gallery.toml` loading, merging over stock defaults, validation |
//! | [`highlight`] | Highlighter trait and the syntect-backed implementation |
//! | [`inline`] | Rewrites class-based highlight markup into inline `style` attributes |
//! | [`generate`] | Renders theme pages, `index.html` and `all.html` using Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Class-Based Fragments, Inlined Late
//!
//! Every highlighted block is wrapped in `<pre class="chroma">` and each token
//! carries exactly one class, with the theme's rules scoped under `.chroma`.
//! Theme pages embed that stylesheet as-is. The combined page shows every
//! theme at once, so one stylesheet would clash with the next; there the
//! rules are substituted into `style` attributes by plain string
//! replacement in [`inline`].
//!
//! ## Deterministic Output
//!
//! Generation takes the date as an argument. Given the same config, date and
//! highlighter, every file is byte-identical across runs.

pub mod config;
pub mod generate;
pub mod highlight;
pub mod inline;
pub mod output;
pub mod themes;

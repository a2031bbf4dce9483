//! HTML gallery generation.
//!
//! Renders every page of the gallery and writes it to the output directory.
//!
//! ## Generated Pages
//!
//! - **Theme pages** (`/{theme}.html`): the sample highlighted in one theme,
//!   with Prev / Next / Up / All buttons
//! - **Index page** (`/index.html`): one link per theme, in gallery order
//! - **Combined page** (`/all.html`): every theme on one page, styles inlined
//!
//! ## Output Structure
//!
//! ```text
//! ./
//! ├── 1337.html
//! ├── base16-eighties-dark.html
//! ├── ...
//! ├── zenburn.html
//! ├── index.html
//! └── all.html
//! ```
//!
//! Pages are written one at a time in that order. The first failure stops
//! the run; pages already written stay on disk.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Theme pages are rendered plain and then passed whole to
//! [`Highlighter::render_document`], which highlights the `<pre>` block and
//! embeds the theme's stylesheet. The combined page cannot hold one
//! stylesheet per theme, so each fragment is run through
//! [`inline_styles`] first.

use crate::config::{FooterConfig, GalleryConfig};
use crate::highlight::{HighlightError, Highlighter};
use crate::inline::inline_styles;
use crate::themes::neighbors;
use chrono::NaiveDate;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Highlighting error: {0}")]
    Highlight(#[from] HighlightError),
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const INDEX_PAGE: &str = "index.html";
pub const ALL_PAGE: &str = "all.html";

const PAGE_CSS: &str = include_str!("../static/page.css");
const ALL_CSS: &str = include_str!("../static/all.css");

/// What [`generate`] wrote, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub theme_pages: Vec<ThemePage>,
    pub index_page: String,
    pub combined_page: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePage {
    pub theme: String,
    pub file_name: String,
}

/// File name of a theme's own page.
pub fn theme_page_name(theme: &str) -> String {
    format!("{theme}.html")
}

pub fn generate(
    config: &GalleryConfig,
    highlighter: &dyn Highlighter,
    output_dir: &Path,
    date: NaiveDate,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let mut theme_pages = Vec::with_capacity(config.themes.len());
    for (index, theme) in config.themes.iter().enumerate() {
        let page = render_theme_page(highlighter, config, index, date)?;
        let file_name = theme_page_name(theme);
        write_page(output_dir, &file_name, &page)?;
        theme_pages.push(ThemePage {
            theme: theme.clone(),
            file_name,
        });
    }

    let index_html = render_index(config, date);
    write_page(output_dir, INDEX_PAGE, &index_html.into_string())?;

    let all_html = render_all(highlighter, config, date)?;
    write_page(output_dir, ALL_PAGE, &all_html.into_string())?;

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        theme_pages,
        index_page: INDEX_PAGE.to_string(),
        combined_page: ALL_PAGE.to_string(),
    })
}

fn write_page(output_dir: &Path, file_name: &str, contents: &str) -> Result<(), GenerateError> {
    let path = output_dir.join(file_name);
    fs::write(&path, contents).map_err(|source| GenerateError::Write { path, source })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// A button that navigates to `target`.
fn link_button(label: &str, target: &str) -> Markup {
    html! {
        button onclick={ "location.href='" (target) "'" } { (label) }
    }
}

/// Renders the Prev / Next / Up / All buttons of a theme page.
///
/// Prev and Next are disabled at the ends of the list.
fn nav_buttons(themes: &[String], index: usize) -> Markup {
    let around = neighbors(themes, index);
    html! {
        @if let Some(prev) = around.prev {
            (link_button("Prev", &theme_page_name(prev)))
        } @else {
            button disabled { "Prev" }
        }
        @if let Some(next) = around.next {
            (link_button("Next", &theme_page_name(next)))
        } @else {
            button disabled { "Next" }
        }
        (link_button("Up", INDEX_PAGE))
        (link_button("All", ALL_PAGE))
    }
}

/// `YYYY-MM-DD`, as shown in the footer.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Renders the footer shared by every page
pub fn footer(credit: &FooterConfig, date: NaiveDate) -> Markup {
    html! {
        small {
            "Generated " (format_date(date)) " by " (env!("CARGO_PKG_NAME"))
            " using " a href=(credit.url) { (credit.name) } "."
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the page for `config.themes[index]`, before highlighting.
fn theme_page_source(config: &GalleryConfig, index: usize, date: NaiveDate) -> Markup {
    let theme = &config.themes[index];
    let content = html! {
        h1 { (theme) }
        code {
            pre { (config.sample.code) }
        }
        (nav_buttons(&config.themes, index))
        (footer(&config.footer, date))
    };
    base_document(theme, PAGE_CSS, content)
}

/// Renders and highlights the page for `config.themes[index]`.
pub fn render_theme_page(
    highlighter: &dyn Highlighter,
    config: &GalleryConfig,
    index: usize,
    date: NaiveDate,
) -> Result<String, HighlightError> {
    let source = theme_page_source(config, index, date);
    highlighter.render_document(&source.into_string(), &config.themes[index])
}

/// Renders the index page linking to every theme
pub fn render_index(config: &GalleryConfig, date: NaiveDate) -> Markup {
    let content = html! {
        h1 id="main-headline" { (config.title) }
        ul {
            @for theme in &config.themes {
                li {
                    a href=(theme_page_name(theme)) title={ (theme) " style" } { (theme) }
                }
            }
        }
        p {
            a href=(ALL_PAGE) title="All styles on one page" { "All styles on one page" }
        }
        (footer(&config.footer, date))
    };

    base_document(&config.title, PAGE_CSS, content)
}

/// Renders the combined page with every theme's sample, styles inlined
pub fn render_all(
    highlighter: &dyn Highlighter,
    config: &GalleryConfig,
    date: NaiveDate,
) -> Result<Markup, HighlightError> {
    let mut sections = String::new();
    for theme in &config.themes {
        let fragment =
            highlighter.render_fragment(&config.sample.code, theme, config.combined.line_numbers)?;
        let heading = html! {
            h2 {
                a.stylelink href=(theme_page_name(theme)) title={ "View only " (theme) } { (theme) }
            }
        };
        sections.push_str(&heading.into_string());
        sections.push_str(&inline_styles(&fragment.html, &fragment.css));
    }

    let content = html! {
        h1 { (config.title) }
        (PreEscaped(sections))
        p {
            a id="bottom" href=(INDEX_PAGE) title="Back to overview" { "Back to overview" }
        }
        (footer(&config.footer, date))
    };

    Ok(base_document(&config.title, ALL_CSS, content))
}

// ============================================================================
// Tests
// ============================================================================

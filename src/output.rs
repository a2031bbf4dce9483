//! CLI output formatting.
//!
//! Output is **theme-centric**: every line leads with the theme's position in
//! the gallery and its name, with the file it produced as secondary context.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! 001 1337 → 1337.html
//! 002 base16-eighties-dark → base16-eighties-dark.html
//! ...
//! Index → index.html
//! All themes → all.html
//!
//! Generated 25 theme pages in ./
//! ```
//!
//! ## List
//!
//! ```text
//! 001 1337
//! 002 base16-eighties-dark
//! ```
//!
//! With `--available`, every theme the highlighter knows, configured ones
//! marked with `*`:
//!
//! ```text
//! * 1337
//!   coldark-cold
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::generate::GenerateReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format build output showing every generated file.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in report.theme_pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.theme,
            page.file_name
        ));
    }
    lines.push(format!("Index \u{2192} {}", report.index_page));
    lines.push(format!("All themes \u{2192} {}", report.combined_page));

    let count = report.theme_pages.len();
    let noun = if count == 1 { "page" } else { "pages" };
    lines.push(String::new());
    lines.push(format!(
        "Generated {} theme {} in {}",
        count,
        noun,
        report.output_dir.display()
    ));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

/// Format the configured themes in gallery order.
pub fn format_theme_list(themes: &[String]) -> Vec<String> {
    themes
        .iter()
        .enumerate()
        .map(|(i, theme)| format!("{} {}", format_index(i + 1), theme))
        .collect()
}

/// Format every available theme, marking the configured ones.
pub fn format_available_themes(available: &[&str], configured: &[String]) -> Vec<String> {
    available
        .iter()
        .map(|theme| {
            let marker = if configured.iter().any(|c| c == *theme) {
                '*'
            } else {
                ' '
            };
            format!("{} {}", marker, theme)
        })
        .collect()
}

/// Print lines to stdout.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::ThemePage;
    use std::path::PathBuf;

    fn report(themes: &[&str]) -> GenerateReport {
        GenerateReport {
            output_dir: PathBuf::from("site"),
            theme_pages: themes
                .iter()
                .map(|t| ThemePage {
                    theme: t.to_string(),
                    file_name: format!("{t}.html"),
                })
                .collect(),
            index_page: "index.html".to_string(),
            combined_page: "all.html".to_string(),
        }
    }

    #[test]
    fn format_index_pads_to_three() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(25), "025");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn generate_output_lists_pages_in_order() {
        let lines = format_generate_output(&report(&["nord", "dracula"]));
        assert_eq!(
            lines,
            vec![
                "001 nord \u{2192} nord.html",
                "002 dracula \u{2192} dracula.html",
                "Index \u{2192} index.html",
                "All themes \u{2192} all.html",
                "",
                "Generated 2 theme pages in site",
            ]
        );
    }

    #[test]
    fn generate_output_singular_summary() {
        let lines = format_generate_output(&report(&["nord"]));
        assert_eq!(lines.last().unwrap(), "Generated 1 theme page in site");
    }

    #[test]
    fn theme_list_is_numbered() {
        let themes = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format_theme_list(&themes), vec!["001 a", "002 b"]);
    }

    #[test]
    fn available_themes_mark_configured() {
        let configured = vec!["nord".to_string()];
        let lines = format_available_themes(&["dracula", "nord"], &configured);
        assert_eq!(lines, vec!["  dracula", "* nord"]);
    }
}

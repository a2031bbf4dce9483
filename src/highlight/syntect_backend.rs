//! Highlighter backed by `syntect`, with themes from `two-face`.
//!
//! ## Crate mapping
//!
//! | Concern | Crate / function |
//! |---|---|
//! | Syntax definitions | `syntect::parsing::SyntaxSet::load_defaults_newlines` |
//! | Themes | `two_face::theme::extra` (bat's curated theme set) |
//! | Tokenizing + styling | `syntect::easy::HighlightLines` |
//! | Markup + escaping | `maud` |
//!
//! syntect hands back `(Style, &str)` pairs. This module turns each distinct
//! style into a short class (`t0`, `t1`, …, numbered in first-seen order) and
//! writes one rule per class under the `.chroma` wrapper. Tokens drawn in the
//! theme's plain text style get no span at all.

use super::backend::{Fragment, HighlightError, Highlighter, WRAPPER_CLASS};
use super::splice::{find_pre_blocks, inject_style, replace_blocks, unescape_html};
use maud::{Markup, html};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, FontStyle, Style, Theme};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;
use two_face::theme::{EmbeddedLazyThemeSet, EmbeddedThemeName};

/// Gallery theme names and the embedded themes they resolve to.
const THEMES: &[(&str, EmbeddedThemeName)] = &[
    ("1337", EmbeddedThemeName::Leet),
    ("base16-eighties-dark", EmbeddedThemeName::Base16EightiesDark),
    ("base16-mocha-dark", EmbeddedThemeName::Base16MochaDark),
    ("base16-ocean-dark", EmbeddedThemeName::Base16OceanDark),
    ("base16-ocean-light", EmbeddedThemeName::Base16OceanLight),
    ("coldark-cold", EmbeddedThemeName::ColdarkCold),
    ("coldark-dark", EmbeddedThemeName::ColdarkDark),
    ("dark-neon", EmbeddedThemeName::DarkNeon),
    ("dracula", EmbeddedThemeName::Dracula),
    ("github", EmbeddedThemeName::Github),
    ("gruvbox-dark", EmbeddedThemeName::GruvboxDark),
    ("gruvbox-light", EmbeddedThemeName::GruvboxLight),
    ("inspired-github", EmbeddedThemeName::InspiredGithub),
    ("monokai-extended", EmbeddedThemeName::MonokaiExtended),
    ("monokai-extended-bright", EmbeddedThemeName::MonokaiExtendedBright),
    ("monokai-extended-light", EmbeddedThemeName::MonokaiExtendedLight),
    ("monokai-extended-origin", EmbeddedThemeName::MonokaiExtendedOrigin),
    ("nord", EmbeddedThemeName::Nord),
    ("one-half-dark", EmbeddedThemeName::OneHalfDark),
    ("one-half-light", EmbeddedThemeName::OneHalfLight),
    ("solarized-dark", EmbeddedThemeName::SolarizedDark),
    ("solarized-light", EmbeddedThemeName::SolarizedLight),
    ("sublime-snazzy", EmbeddedThemeName::SublimeSnazzy),
    ("two-dark", EmbeddedThemeName::TwoDark),
    ("zenburn", EmbeddedThemeName::Zenburn),
];

/// Class of the line-number spans.
const LINE_NUMBER_CLASS: &str = "ln";

/// syntect + two-face highlighter for a single source language.
///
/// See the [module docs](self) for the crate-to-concern mapping.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
    themes: EmbeddedLazyThemeSet,
    language: String,
}

impl SyntectHighlighter {
    /// `language` is a syntect syntax token: a name or file extension such as
    /// `"go"` or `"rs"`.
    pub fn new(language: &str) -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: two_face::theme::extra(),
            language: language.to_string(),
        }
    }

    /// Every theme name this highlighter accepts, sorted.
    pub fn available_themes() -> Vec<&'static str> {
        THEMES.iter().map(|(name, _)| *name).collect()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn theme(&self, name: &str) -> Result<&Theme, HighlightError> {
        THEMES
            .iter()
            .find(|(slug, _)| *slug == name)
            .map(|(_, embedded)| &self.themes[*embedded])
            .ok_or_else(|| HighlightError::UnknownTheme(name.to_string()))
    }

    fn syntax(&self) -> Result<&SyntaxReference, HighlightError> {
        self.syntaxes
            .find_syntax_by_token(&self.language)
            .ok_or_else(|| HighlightError::UnknownLanguage(self.language.clone()))
    }

    /// Highlight `code` and turn it into a `<pre class="chroma">` block,
    /// registering every token style in `classes`.
    fn render_markup(
        &self,
        code: &str,
        theme: &Theme,
        line_numbers: bool,
        classes: &mut ClassRegistry,
    ) -> Result<Markup, HighlightError> {
        let mut highlighter = HighlightLines::new(self.syntax()?, theme);
        let default_fg = theme.settings.foreground;

        let mut lines: Vec<Vec<(Option<String>, &str)>> = Vec::new();
        for line in LinesWithEndings::from(code) {
            let tokens = highlighter
                .highlight_line(line, &self.syntaxes)?
                .into_iter()
                .map(|(style, text)| {
                    let class = token_declaration(&style, default_fg)
                        .map(|decl| classes.class_for(decl));
                    (class, text)
                })
                .collect();
            lines.push(tokens);
        }

        Ok(html! {
            pre class=(WRAPPER_CLASS) {
                @for (number, line) in lines.iter().enumerate() {
                    @if line_numbers {
                        span class=(LINE_NUMBER_CLASS) { (number + 1) }
                    }
                    @for (class, text) in line {
                        @if let Some(class) = class {
                            span class=(class) { (text) }
                        } @else {
                            (text)
                        }
                    }
                }
            }
        })
    }
}

impl Highlighter for SyntectHighlighter {
    fn render_document(&self, input: &str, theme: &str) -> Result<String, HighlightError> {
        let theme = self.theme(theme)?;
        let blocks = find_pre_blocks(input);

        let mut classes = ClassRegistry::default();
        let mut replacements = Vec::with_capacity(blocks.len());
        for block in &blocks {
            let code = unescape_html(block.content(input));
            // Browsers drop a newline right after `<pre>`; so do we
            let code = code.strip_prefix('\n').unwrap_or(&code);
            let markup = self.render_markup(code, theme, false, &mut classes)?;
            replacements.push(markup.into_string());
        }

        let body = replace_blocks(input, &blocks, &replacements);
        Ok(inject_style(&body, &classes.stylesheet(theme, false)))
    }

    fn render_fragment(
        &self,
        code: &str,
        theme: &str,
        line_numbers: bool,
    ) -> Result<Fragment, HighlightError> {
        let theme = self.theme(theme)?;
        let mut classes = ClassRegistry::default();
        let markup = self.render_markup(code, theme, line_numbers, &mut classes)?;
        Ok(Fragment {
            html: markup.into_string(),
            css: classes.stylesheet(theme, line_numbers),
        })
    }
}

/// Distinct token declarations, in first-seen order. Index `n` is class `tn`.
#[derive(Debug, Default)]
struct ClassRegistry {
    declarations: Vec<String>,
}

impl ClassRegistry {
    fn class_for(&mut self, declaration: String) -> String {
        let index = match self.declarations.iter().position(|d| *d == declaration) {
            Some(index) => index,
            None => {
                self.declarations.push(declaration);
                self.declarations.len() - 1
            }
        };
        format!("t{index}")
    }

    fn stylesheet(&self, theme: &Theme, line_numbers: bool) -> String {
        let settings = &theme.settings;
        let mut wrapper = Vec::new();
        if let Some(fg) = settings.foreground {
            wrapper.push(format!("color: {}", hex(fg)));
        }
        if let Some(bg) = settings.background {
            wrapper.push(format!("background-color: {}", hex(bg)));
        }

        let mut css = format!(".{WRAPPER_CLASS} {{ {} }}\n", wrapper.join("; "));
        if line_numbers {
            let mut decl = vec!["margin-right: 0.8em".to_string()];
            if let Some(gutter) = settings.gutter_foreground.or(settings.foreground) {
                decl.insert(0, format!("color: {}", hex(gutter)));
            }
            css.push_str(&format!(
                ".{WRAPPER_CLASS} .{LINE_NUMBER_CLASS} {{ {} }}\n",
                decl.join("; ")
            ));
        }
        for (index, decl) in self.declarations.iter().enumerate() {
            css.push_str(&format!(".{WRAPPER_CLASS} .t{index} {{ {decl} }}\n"));
        }
        css
    }
}

/// CSS declaration for a token, or `None` when it looks like plain text.
fn token_declaration(style: &Style, default_fg: Option<Color>) -> Option<String> {
    let mut parts = Vec::new();
    if Some(style.foreground) != default_fg {
        parts.push(format!("color: {}", hex(style.foreground)));
    }
    if style.font_style.contains(FontStyle::BOLD) {
        parts.push("font-weight: bold".to_string());
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        parts.push("font-style: italic".to_string());
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        parts.push("text-decoration: underline".to_string());
    }
    (!parts.is_empty()).then(|| parts.join("; "))
}

fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::DEFAULT_THEMES;

    const GO: &str = "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"Hello\")\n}\n";

    fn go() -> SyntectHighlighter {
        SyntectHighlighter::new("go")
    }

    #[test]
    fn default_themes_are_all_available() {
        let available = SyntectHighlighter::available_themes();
        for theme in DEFAULT_THEMES {
            assert!(available.contains(theme), "{theme} is not available");
        }
    }

    #[test]
    fn available_themes_are_sorted() {
        let available = SyntectHighlighter::available_themes();
        let mut sorted = available.clone();
        sorted.sort();
        assert_eq!(available, sorted);
    }

    #[test]
    fn unknown_theme_is_error() {
        let err = go().render_fragment(GO, "no-such-theme", false).unwrap_err();
        assert!(matches!(err, HighlightError::UnknownTheme(t) if t == "no-such-theme"));
    }

    #[test]
    fn unknown_theme_is_error_for_documents_too() {
        let err = go()
            .render_document("<html><head></head></html>", "nope")
            .unwrap_err();
        assert!(matches!(err, HighlightError::UnknownTheme(_)));
    }

    #[test]
    fn unknown_language_is_error() {
        let err = SyntectHighlighter::new("no-such-language")
            .render_fragment(GO, "dracula", false)
            .unwrap_err();
        assert!(matches!(err, HighlightError::UnknownLanguage(l) if l == "no-such-language"));
    }

    #[test]
    fn fragment_is_wrapped_in_chroma_pre() {
        let fragment = go().render_fragment(GO, "dracula", false).unwrap();
        assert!(fragment.html.starts_with(r#"<pre class="chroma">"#));
        assert!(fragment.html.ends_with("</pre>"));
        assert!(fragment.css.starts_with(".chroma { color: #"));
    }

    #[test]
    fn fragment_classes_have_rules() {
        let fragment = go().render_fragment(GO, "monokai-extended", false).unwrap();
        let mut found = 0;
        for piece in fragment.html.split(r#"<span class=""#).skip(1) {
            let class = piece.split('"').next().unwrap();
            assert!(
                fragment.css.contains(&format!(".chroma .{class} {{")),
                "no rule for {class}"
            );
            found += 1;
        }
        assert!(found > 0, "expected at least one highlighted token");
    }

    #[test]
    fn fragment_escapes_text() {
        let fragment = go().render_fragment(GO, "github", false).unwrap();
        assert!(fragment.html.contains("&quot;"));
        assert!(!fragment.html.contains("\"fmt\""));
    }

    #[test]
    fn fragment_without_line_numbers_has_no_ln_spans() {
        let fragment = go().render_fragment(GO, "nord", false).unwrap();
        assert!(!fragment.html.contains(r#"class="ln""#));
        assert!(!fragment.css.contains(".ln"));
    }

    #[test]
    fn fragment_with_line_numbers() {
        let fragment = go().render_fragment(GO, "nord", true).unwrap();
        assert!(fragment.html.contains(r#"<span class="ln">1</span>"#));
        assert!(fragment.html.contains(r#"<span class="ln">7</span>"#));
        assert!(fragment.css.contains(".chroma .ln {"));
    }

    #[test]
    fn fragment_is_deterministic() {
        let a = go().render_fragment(GO, "zenburn", false).unwrap();
        let b = go().render_fragment(GO, "zenburn", false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_default_theme_renders() {
        let highlighter = go();
        for theme in DEFAULT_THEMES {
            highlighter
                .render_fragment(GO, theme, false)
                .unwrap_or_else(|e| panic!("{theme}: {e}"));
        }
    }

    #[test]
    fn document_blocks_are_highlighted_in_place() {
        let input = format!(
            "<!DOCTYPE html><html><head><title>x</title></head><body><code><pre>\n{GO}</pre></code></body></html>"
        );
        let out = go().render_document(&input, "dracula").unwrap();
        assert!(out.contains(r#"<code><pre class="chroma">"#));
        assert!(out.contains("</pre></code>"));
        assert!(out.contains("<style>.chroma {"));
        assert!(out.find("<style>").unwrap() < out.find("</head>").unwrap());
    }

    #[test]
    fn document_source_is_unescaped_before_highlighting() {
        let out = go()
            .render_document(
                "<head></head><pre>x := &quot;a&quot;</pre>",
                "dracula",
            )
            .unwrap();
        // Escaped exactly once in the output
        assert!(out.contains("&quot;"));
        assert!(!out.contains("&amp;quot;"));
    }

    #[test]
    fn document_drops_newline_after_pre() {
        let out = go()
            .render_document("<head></head><pre>\npackage main</pre>", "dracula")
            .unwrap();
        assert!(!out.contains("<pre class=\"chroma\">\n"));
    }

    #[test]
    fn document_without_pre_still_gets_theme_css() {
        let out = go()
            .render_document("<head></head><p>hi</p>", "solarized-light")
            .unwrap();
        assert!(out.contains("<style>.chroma {"));
        assert!(out.ends_with("<p>hi</p>"));
    }

    #[test]
    fn class_registry_reuses_classes() {
        let mut registry = ClassRegistry::default();
        assert_eq!(registry.class_for("color: #fff".to_string()), "t0");
        assert_eq!(registry.class_for("color: #000".to_string()), "t1");
        assert_eq!(registry.class_for("color: #fff".to_string()), "t0");
    }

    #[test]
    fn plain_tokens_get_no_declaration() {
        let fg = Color {
            r: 1,
            g: 2,
            b: 3,
            a: 0xff,
        };
        let style = Style {
            foreground: fg,
            ..Style::default()
        };
        assert_eq!(token_declaration(&style, Some(fg)), None);
    }

    #[test]
    fn bold_tokens_are_declared() {
        let style = Style {
            font_style: FontStyle::BOLD,
            ..Style::default()
        };
        let decl = token_declaration(&style, Some(style.foreground)).unwrap();
        assert_eq!(decl, "font-weight: bold");
    }

    #[test]
    fn hex_is_lowercase_six_digits() {
        let c = Color {
            r: 0xAB,
            g: 0x0,
            b: 0x1F,
            a: 0xff,
        };
        assert_eq!(hex(c), "#ab001f");
    }
}

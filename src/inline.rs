//! Class-to-inline-style conversion for the combined page.
//!
//! Every theme on the combined page uses the same class names (`t0`, `t1`, …)
//! under the same `.chroma` wrapper, so their stylesheets cannot share one
//! document. Instead each fragment's CSS is folded into `style="…"`
//! attributes.
//!
//! The CSS is split textually, not parsed: split on `}`, drop the wrapper
//! class, split on `{`. A rule for the bare wrapper styles every `<pre ` tag;
//! any other rule replaces the literal `<span class="NAME"` with
//! `<span style="DECL"`. Blocks that do not split into exactly one selector and
//! one declaration are ignored.

use crate::highlight::WRAPPER_CLASS;

/// One rule pulled out of highlighter CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    /// Class name without the leading dot. Empty for the wrapper rule.
    pub class: String,
    /// Declaration text between the braces, trimmed.
    pub declaration: String,
}

/// Split highlighter CSS into rules, in source order.
pub fn parse_rules(css: &str) -> Vec<CssRule> {
    let wrapper = format!(".{WRAPPER_CLASS}");
    css.split('}')
        .filter_map(|block| {
            let block = block.replace(&wrapper, "");
            let mut parts = block.split('{');
            let (Some(selector), Some(declaration), None) =
                (parts.next(), parts.next(), parts.next())
            else {
                return None;
            };
            let selector = selector.trim();
            let class = selector.strip_prefix('.').unwrap_or(selector);
            Some(CssRule {
                class: class.to_string(),
                declaration: declaration.trim().to_string(),
            })
        })
        .collect()
}

/// Apply every rule of `css` to `html` as inline styles.
pub fn inline_styles(html: &str, css: &str) -> String {
    let mut html = html.to_string();
    for rule in parse_rules(css) {
        html = if rule.class.is_empty() {
            html.replace("<pre ", &format!(r#"<pre style="{}" "#, rule.declaration))
        } else {
            html.replace(
                &format!(r#"<span class="{}""#, rule.class),
                &format!(r#"<span style="{}""#, rule.declaration),
            )
        };
    }
    html
}

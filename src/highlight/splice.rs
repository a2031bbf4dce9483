//! Pure string helpers for splicing highlighted output into a document.
//!
//! Documents are treated as loose text, not parsed as HTML: a code block is
//! anything from `<pre` (followed by `>` or whitespace) to the next `</pre>`.

/// Byte ranges of one `<pre>` block inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreBlock {
    /// Start of `<pre`.
    pub start: usize,
    /// End of `</pre>` (exclusive).
    pub end: usize,
    /// Start of the text between the tags.
    pub content_start: usize,
    /// End of the text between the tags (exclusive).
    pub content_end: usize,
}

impl PreBlock {
    /// The text between the tags.
    pub fn content<'a>(&self, html: &'a str) -> &'a str {
        &html[self.content_start..self.content_end]
    }
}

const CLOSE_TAG: &str = "</pre>";

/// Find every `<pre>` block, in document order. Unterminated blocks are
/// skipped.
pub fn find_pre_blocks(html: &str) -> Vec<PreBlock> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(offset) = html[pos..].find("<pre") {
        let start = pos + offset;
        let after_name = start + "<pre".len();

        // `<prefix>` and friends are not `<pre>`
        let is_pre = html[after_name..]
            .chars()
            .next()
            .is_some_and(|c| c == '>' || c.is_ascii_whitespace());
        if !is_pre {
            pos = after_name;
            continue;
        }

        let Some(open_end) = html[after_name..].find('>').map(|i| after_name + i + 1) else {
            break;
        };
        let Some(close) = html[open_end..].find(CLOSE_TAG).map(|i| open_end + i) else {
            break;
        };

        blocks.push(PreBlock {
            start,
            end: close + CLOSE_TAG.len(),
            content_start: open_end,
            content_end: close,
        });
        pos = close + CLOSE_TAG.len();
    }

    blocks
}

/// Replace each block with the markup at the same position in `replacements`.
///
/// `blocks` must come from [`find_pre_blocks`] on the same `html`.
pub fn replace_blocks(html: &str, blocks: &[PreBlock], replacements: &[String]) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    for (block, replacement) in blocks.iter().zip(replacements) {
        out.push_str(&html[pos..block.start]);
        out.push_str(replacement);
        pos = block.end;
    }
    out.push_str(&html[pos..]);
    out
}

/// Undo the escaping HTML templating applies to text, so the highlighter
/// sees the original source. `&amp;` goes last so `&amp;lt;` stays `&lt;`.
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Embed `css` as a `<style>` element right before `</head>`, or at the very
/// start when the document has no head.
pub fn inject_style(html: &str, css: &str) -> String {
    let style = format!("<style>{css}</style>");
    match html.find("</head>") {
        Some(at) => {
            let mut out = String::with_capacity(html.len() + style.len());
            out.push_str(&html[..at]);
            out.push_str(&style);
            out.push_str(&html[at..]);
            out
        }
        None => format!("{style}{html}"),
    }
}

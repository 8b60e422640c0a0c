use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break pattern"));
static BLOCK_END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(p|div|h[1-6]|li|blockquote|pre|tr|ul|ol)\s*>").expect("block end pattern")
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(\n[ \t]*)+").expect("blank run pattern"));

/// Plain-text rendering of editor HTML: one line per block, tags dropped,
/// common entities decoded.
pub fn html_to_text(html: &str) -> String {
    let text = LINE_BREAK_RE.replace_all(html, "\n");
    let text = BLOCK_END_RE.replace_all(&text, "\n");
    let text = TAG_RE.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = BLANK_RUN_RE.replace_all(&text, "\n");
    text.trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Wraps each line in its own paragraph when `text` carries no markup;
/// markup is returned untouched.
pub fn promote_plain_text(text: &str) -> String {
    if text.contains('<') {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| format!("<p>{}</p>", line.trim_end_matches('\r')))
        .collect()
}

/// The first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Like `truncate_chars`, with "..." appended only when something was cut.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", truncate_chars(text, max_chars))
    } else {
        text.to_string()
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

static IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img[^>]*>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip markup from raw feed HTML, returning clean plain text.
///
/// Image tags are removed wholesale before general tag stripping so that
/// stray alt-text fragments never leak into the output. Remaining tags are
/// dropped through the HTML parser; entities are decoded after tag removal
/// and whitespace runs are collapsed to single spaces. Never fails: inputs
/// the parser yields nothing for go through a plain regex tag strip instead,
/// and empty input returns an empty string.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let html = IMG_TAG.replace_all(html, "");

    let text = match parse_text(&html) {
        Some(text) => text,
        None => ANY_TAG.replace_all(&html, " ").into_owned(),
    };

    let decoded = html_escape::decode_html_entities(&text);
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}

/// Extract character data via the tag-soup parser. The parser recovers from
/// malformed markup rather than erroring; an input it cannot extract any
/// text from reports `None` so the caller can fall back to a regex strip.
fn parse_text(html: &str) -> Option<String> {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();

    if text.trim().is_empty() && !html.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

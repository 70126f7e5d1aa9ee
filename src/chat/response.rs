use std::sync::LazyLock;

use regex::Regex;

static BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.*?)\*\*").expect("BOLD_REGEX: invalid pattern")
});

/// Turns the markdown-ish answer into the HTML fragment the chat panel shows.
///
/// `**x**` becomes `<strong>x</strong>`, a blank line starts a new paragraph
/// and a single newline becomes `<br/>`.
pub fn render_response_html(text: &str) -> String {
    let bolded = BOLD_REGEX.replace_all(text, "<strong>$1</strong>");
    let paragraphs = bolded.replace("\n\n", "</p><p>");
    let lines = paragraphs.replace('\n', "<br/>");
    format!("<p>{}</p>", lines)
}

//! Free-text escaping and rich-text allow-listing.

use std::collections::HashSet;

use ammonia::Builder;

/// Tags that survive [`sanitize_html`]. No attributes are kept on any of them.
const ALLOWED_TAGS: [&str; 6] = ["b", "i", "em", "strong", "p", "br"];

/// Escape `< > " ' /` to HTML entities.
///
/// Not tag-aware and does not truncate; `&` is left alone, so running the
/// function twice yields the same output as running it once.
pub fn sanitize_text(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            '/' => output.push_str("&#x2F;"),
            _ => output.push(c),
        }
    }
    output
}

/// Reduce rich text to the inline tag allow-list.
///
/// Disallowed tags are unwrapped (their text stays), except `script` and
/// `style` whose content is dropped too. Every attribute is removed.
pub fn sanitize_html(input: &str) -> String {
    let mut builder = Builder::empty();
    builder
        .add_tags(&ALLOWED_TAGS)
        .clean_content_tags(HashSet::from(["script", "style"]));
    builder.clean(input).to_string()
}

//! Stateless HTML fragment helpers.
//!
//! Content is passed through verbatim: nothing is escaped, trimmed, or
//! validated, so callers may nest fragments produced here.

/// Wrap `content` in `<b>` tags.
pub fn bold(content: &str) -> String {
    wrap("b", content)
}

/// Wrap `content` in `<i>` tags.
pub fn italic(content: &str) -> String {
    wrap("i", content)
}

/// Render `items` as an unordered list, preserving input order.
pub fn formatted_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        out.push_str("<li>");
        out.push_str(item.as_ref());
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

fn wrap(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}

//! Markup rendering for parsed log lines.
//!
//! Usernames and content are user-supplied, so every field is escaped before
//! it is placed in markup. The fragment produced here is inserted as the inner
//! HTML of a `div.message` node by the browser client.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

use crate::line::ChatLine;

/// Escape text for use as HTML element content or attribute value.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render the inner markup of one message node.
#[must_use]
pub fn render_line_html(line: &ChatLine) -> String {
    format!(
        concat!(
            r#"<div class="message-header">"#,
            r#"<span class="username">{username}</span>"#,
            r#"<span class="timestamp">{date} {time}</span>"#,
            r#"</div>"#,
            r#"<div class="message-content">{content}</div>"#,
        ),
        username = escape_html(&line.username),
        date = escape_html(&line.date),
        time = escape_html(&line.time),
        content = escape_html(&line.content),
    )
}

//! Wire grammar for room log lines.
//!
//! A room log is newline-delimited text, oldest first, one message per line:
//!
//! ```text
//! [<date> <time>] <username>: <content>
//! ```
//!
//! Every field is non-empty. Date, time and username are matched
//! shortest-first; content takes the remainder of the line. Lines that do not
//! fit the grammar carry no message and are dropped by callers.

#[cfg(test)]
#[path = "line_test.rs"]
mod line_test;

use std::fmt;

/// A parsed room log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub date: String,
    pub time: String,
    pub username: String,
    pub content: String,
}

impl ChatLine {
    /// Parse one log line. Returns `None` when the line does not match the
    /// `[date time] username: content` grammar.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let body = line.strip_prefix('[')?;

        // A later delimiter only leaves less line for the fields after it, so
        // when the first candidate for a field fails no later one can succeed.
        // One left-to-right pass per field keeps this linear.
        let (date_end, _) = body.match_indices(' ').find(|(i, _)| *i > 0)?;
        let after_date = &body[date_end + 1..];
        let (time_end, _) = after_date.match_indices("] ").find(|(i, _)| *i > 0)?;
        let after_time = &after_date[time_end + 2..];
        let (name_end, _) = after_time.match_indices(": ").find(|(i, _)| *i > 0)?;
        let content = &after_time[name_end + 2..];
        if content.is_empty() {
            return None;
        }

        Some(Self {
            date: body[..date_end].to_owned(),
            time: after_date[..time_end].to_owned(),
            username: after_time[..name_end].to_owned(),
            content: content.to_owned(),
        })
    }
}

impl fmt::Display for ChatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}] {}: {}", self.date, self.time, self.username, self.content)
    }
}

/// Split a raw log body into its lines.
///
/// Returns an empty vector when the body is empty or whitespace only, which
/// callers treat as "room cleared".
#[must_use]
pub fn split_log(body: &str) -> Vec<&str> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.lines().collect()
}

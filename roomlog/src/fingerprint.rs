//! Username fingerprint of a log snapshot.
//!
//! The fingerprint is the sorted, `|`-joined set of distinct authors. Two
//! snapshots with the same author set share a fingerprint regardless of
//! message order; it changes when someone is renamed out of band.

#[cfg(test)]
#[path = "fingerprint_test.rs"]
mod fingerprint_test;

use std::collections::BTreeSet;

use crate::line::ChatLine;

/// Compute the fingerprint of a set of raw log lines. Unparseable lines do
/// not contribute.
#[must_use]
pub fn username_fingerprint<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let names: BTreeSet<String> = lines
        .into_iter()
        .filter_map(ChatLine::parse)
        .map(|line| line.username)
        .collect();
    names.into_iter().collect::<Vec<_>>().join("|")
}

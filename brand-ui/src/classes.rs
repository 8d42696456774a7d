// SPDX-License-Identifier: MIT OR Apache-2.0

//! Class-name merging.
//!
//! `classes!` keeps the first occurrence of a duplicated class, which means a
//! caller can never override a class the component already set. The merger
//! here walks the list back to front so the last writer wins, both for exact
//! duplicates and for utilities that set the same CSS property.

use std::collections::HashSet;
use yew::Classes;

const OBJECT_FIT: &[&str] = &[
    "object-contain",
    "object-cover",
    "object-fill",
    "object-none",
    "object-scale-down",
];

/// Utilities in the same group override each other.
fn conflict_group(token: &str) -> Option<&'static str> {
    if OBJECT_FIT.contains(&token) {
        Some("object-fit")
    } else if token == "drop-shadow" || token.starts_with("drop-shadow-") {
        Some("drop-shadow")
    } else {
        None
    }
}

/// Merge an ordered list of optional class strings into a single [`Classes`].
///
/// Each entry may hold several whitespace separated classes. `None` and
/// blank entries are skipped. Later entries override earlier ones.
pub fn merge_classes<I, S>(parts: I) -> Classes
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = parts
        .into_iter()
        .flatten()
        .flat_map(|part| {
            part.as_ref()
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect();

    let mut seen = HashSet::new();
    let mut groups = HashSet::new();
    let mut kept: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens.into_iter().rev() {
        if seen.contains(&token) {
            continue;
        }
        if let Some(group) = conflict_group(&token) {
            if !groups.insert(group) {
                continue;
            }
        }
        seen.insert(token.clone());
        kept.push(token);
    }
    kept.reverse();
    kept.into_iter().collect()
}

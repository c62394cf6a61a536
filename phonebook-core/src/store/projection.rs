// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Search and grouping
//!
//! Pure functions deriving the displayed [`ContactGroups`] from the full
//! contact list and the search query. Same inputs always give the same
//! grouping.

use std::collections::BTreeMap;

use crate::contact::Contact;

use super::state::ContactGroups;

/// Group key for contacts without any name characters.
pub const FALLBACK_GROUP_KEY: char = '#';

/// True if `contact` matches the (already trimmed, non-empty) query.
///
/// Names match case-insensitively; phone numbers match literally.
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    contact
        .full_name()
        .to_lowercase()
        .contains(&query.to_lowercase())
        || contact.phone_number().contains(query)
}

/// Uppercase first character of the full name, or [`FALLBACK_GROUP_KEY`].
pub fn group_key(contact: &Contact) -> char {
    contact
        .full_name()
        .chars()
        .next()
        .map(uppercase_char)
        .unwrap_or(FALLBACK_GROUP_KEY)
}

/// Single-character uppercase mapping. Characters whose uppercase form
/// spans several characters ('ß' -> "SS") are kept as they are.
fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Filters, sorts and groups `all` for display.
///
/// A blank query keeps every contact. Sorting is by lowercase full name
/// and stable, so equal names keep their list order.
pub fn project(all: &[Contact], query: &str) -> ContactGroups {
    let query = query.trim();

    let mut filtered: Vec<(String, &Contact)> = all
        .iter()
        .filter(|c| query.is_empty() || matches_query(c, query))
        .map(|c| (c.full_name().to_lowercase(), c))
        .collect();
    filtered.sort_by(|a, b| a.0.cmp(&b.0));

    let mut groups: BTreeMap<char, Vec<Contact>> = BTreeMap::new();
    for (_, contact) in filtered {
        groups
            .entry(group_key(contact))
            .or_default()
            .push(contact.clone());
    }

    ContactGroups::new(groups)
}

// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store snapshot types.

use std::collections::BTreeMap;

use crate::contact::Contact;

/// Contacts grouped by the uppercase first letter of their name.
///
/// Groups iterate in ascending key order; contacts within a group are
/// sorted by lowercase full name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactGroups(BTreeMap<char, Vec<Contact>>);

impl ContactGroups {
    pub fn new(groups: BTreeMap<char, Vec<Contact>>) -> Self {
        ContactGroups(groups)
    }

    /// Contacts under `key`, if the group exists.
    pub fn get(&self, key: char) -> Option<&[Contact]> {
        self.0.get(&key).map(Vec::as_slice)
    }

    /// Group keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.0.keys().copied()
    }

    /// Groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[Contact])> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// All contacts, group by group.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.0.values().flatten()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of contacts across all groups.
    pub fn contact_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<char, Vec<Contact>> {
        self.0
    }
}

/// Snapshot of the store as seen by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactsState {
    /// A request is in flight
    pub is_loading: bool,
    /// Search text exactly as entered
    pub query: String,
    /// Filtered, sorted and grouped contacts
    pub grouped: ContactGroups,
    /// Message of the last failed operation, cleared when the next one starts
    pub error: Option<String>,
}

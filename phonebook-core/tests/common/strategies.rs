// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies

use phonebook_core::Contact;
use proptest::prelude::*;

/// Names, including blank ones and non-letter starts.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z][a-zA-Z]{0,10}",
        1 => "[0-9 ]{0,4}",
        1 => "[ÀÉéüøß][a-z]{0,5}",
    ]
}

pub fn phone_strategy() -> impl Strategy<Value = String> {
    "[0-9+ -]{3,12}"
}

pub fn contact_strategy() -> impl Strategy<Value = Contact> {
    ("[a-f0-9]{8}", name_strategy(), name_strategy(), phone_strategy()).prop_map(
        |(id, first, last, phone)| {
            Contact::new(id, "2026-01-01T00:00:00Z", first, last, phone, None)
        },
    )
}

pub fn contacts_strategy() -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(contact_strategy(), 0..30)
}

/// Queries: short fragments, blank padding and digits.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z]{1,3}",
        " [a-z]{1,2} ",
        "[0-9]{1,3}",
    ]
}

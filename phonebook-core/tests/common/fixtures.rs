// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures

use phonebook_core::{Contact, ContactFields};

pub fn contact(id: &str, first: &str, last: &str, phone: &str) -> Contact {
    Contact::new(id, "2026-01-01T00:00:00Z", first, last, phone, None)
}

pub fn contact_with_image(id: &str, first: &str, last: &str, image: &str) -> Contact {
    Contact::new(
        id,
        "2026-01-01T00:00:00Z",
        first,
        last,
        "555-0100",
        Some(image.to_string()),
    )
}

pub fn fields(first: &str, last: &str, phone: &str) -> ContactFields {
    ContactFields::new(first, last, phone)
}

/// Ann Lee, bob Stone, alice Zed and Carl Ray.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        contact("1", "Ann", "Lee", "555-0101"),
        contact("2", "bob", "Stone", "555-0102"),
        contact("3", "alice", "Zed", "555-0199"),
        contact("4", "Carl", "Ray", "+1 212 555 0104"),
    ]
}

// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display Helpers
//!
//! Terminal output formatting and styling.

use console::style;
use phonebook_core::{Contact, ContactGroups};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "")]
    group: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Displays grouped contacts as one table, the group letter on the first
/// row of each group.
pub fn display_groups(groups: &ContactGroups) {
    let mut rows = Vec::with_capacity(groups.contact_count());
    for (key, contacts) in groups.iter() {
        for (i, contact) in contacts.iter().enumerate() {
            rows.push(ContactRow {
                group: if i == 0 { key.to_string() } else { String::new() },
                name: contact.full_name(),
                phone: contact.phone_number().to_string(),
                id: contact.id().to_string(),
            });
        }
    }

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

/// Displays a contact with full details.
pub fn display_contact_details(contact: &Contact) {
    println!();
    println!("  {}", style(contact.full_name()).bold().cyan());
    println!("  ID:      {}", style(contact.id()).dim());
    println!("  Phone:   {}", contact.phone_number());
    match contact.profile_image_url() {
        Some(url) => println!("  Image:   {}", url),
        None => println!("  Image:   {}", style("(none)").dim()),
    }
    if !contact.created_at().is_empty() {
        println!("  Created: {}", contact.created_at());
    }
    println!();
}

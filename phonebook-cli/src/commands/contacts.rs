// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contacts Command
//!
//! List, view, and manage contacts on the service.

use anyhow::{bail, Context, Result};
use phonebook_core::{Contact, ContactFields, ContactStore, RemoteContactsRepository};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::display;

/// Field changes for `edit`; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct EditArgs {
    pub first: Option<String>,
    pub last: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

#[derive(Serialize)]
struct GroupJson<'a> {
    key: String,
    contacts: &'a [Contact],
}

/// Opens a store over the configured service.
fn open_store(config: &CliConfig) -> Result<ContactStore<RemoteContactsRepository>> {
    let repository = RemoteContactsRepository::from_config(&config.service_config())
        .context("Invalid service configuration")?;
    Ok(ContactStore::new(repository))
}

async fn load(store: &mut ContactStore<RemoteContactsRepository>) -> Result<()> {
    store.load().await.context("Failed to load contacts")
}

/// Lists contacts, optionally filtered.
pub async fn list(config: &CliConfig, query: Option<&str>, json: bool) -> Result<()> {
    let mut store = open_store(config)?;
    if let Some(query) = query {
        store.set_query(query);
    }
    load(&mut store).await?;

    let groups = &store.state().grouped;

    if json {
        let output: Vec<GroupJson<'_>> = groups
            .iter()
            .map(|(key, contacts)| GroupJson {
                key: key.to_string(),
                contacts,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if groups.is_empty() {
        if store.contacts().is_empty() {
            display::info("No contacts yet. Add one with:");
            println!("  phonebook add --first <NAME> --last <NAME> --phone <NUMBER>");
        } else {
            display::info("No contacts match the query.");
        }
        return Ok(());
    }

    println!();
    println!("Contacts ({}):", groups.contact_count());
    println!();
    display::display_groups(groups);
    println!();

    Ok(())
}

/// Shows details for a specific contact.
pub async fn show(config: &CliConfig, id: &str) -> Result<()> {
    let mut store = open_store(config)?;
    load(&mut store).await?;

    match store.contact(id) {
        Some(contact) => {
            display::display_contact_details(contact);
            Ok(())
        }
        None => bail!("Contact '{}' not found", id),
    }
}

/// Adds a contact.
pub async fn add(
    config: &CliConfig,
    first: &str,
    last: &str,
    phone: &str,
    image: Option<&str>,
) -> Result<()> {
    let mut store = open_store(config)?;
    let fields = ContactFields::new(first, last, phone);

    store
        .create_contact(&fields, image.unwrap_or_default())
        .await
        .context("Failed to add contact")?;

    info!(count = store.contacts().len(), "contact added");
    display::success(&format!("Added {} {}", fields.first_name.trim(), fields.last_name.trim()));
    Ok(())
}

/// Edits a contact, keeping unspecified fields.
pub async fn edit(config: &CliConfig, id: &str, changes: EditArgs) -> Result<()> {
    let mut store = open_store(config)?;
    load(&mut store).await?;

    let Some(current) = store.contact(id) else {
        bail!("Contact '{}' not found", id);
    };
    let current = current.fields();
    let fields = ContactFields::new(
        changes.first.unwrap_or(current.first_name),
        changes.last.unwrap_or(current.last_name),
        changes.phone.unwrap_or(current.phone_number),
    );

    store
        .update_contact(id, &fields, changes.image.as_deref())
        .await
        .context("Failed to update contact")?;

    display::success(&format!("Updated contact {}", id));
    Ok(())
}

/// Deletes a contact.
pub async fn delete(config: &CliConfig, id: &str) -> Result<()> {
    let mut store = open_store(config)?;

    store
        .delete_contact(id)
        .await
        .context("Failed to delete contact")?;

    display::success(&format!("Deleted contact {}", id));
    Ok(())
}

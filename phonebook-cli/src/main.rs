// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phonebook CLI
//!
//! Command-line interface for a remote phonebook service.

mod commands;
mod config;
mod display;

use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(version, about = "Browse and edit contacts on a phonebook service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Service base URL
    #[arg(
        long,
        global = true,
        env = "PHONEBOOK_BASE_URL",
        default_value = "http://localhost:8080/"
    )]
    base_url: String,

    /// API key sent with every request
    #[arg(long, global = true, env = "PHONEBOOK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PHONEBOOK_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Proxy URL (http, https or socks5)
    #[arg(long, global = true, env = "PHONEBOOK_PROXY_URL")]
    proxy: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List contacts grouped by initial
    List {
        /// Only show contacts whose name or phone number matches
        #[arg(short, long)]
        query: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one contact
    Show {
        /// Contact ID
        id: String,
    },

    /// Add a contact
    Add {
        /// First name
        #[arg(long)]
        first: String,

        /// Last name
        #[arg(long)]
        last: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Profile image: URL or file:// path to upload
        #[arg(long)]
        image: Option<String>,
    },

    /// Edit a contact; omitted fields keep their current value
    Edit {
        /// Contact ID
        id: String,

        #[arg(long)]
        first: Option<String>,

        #[arg(long)]
        last: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// New profile image: URL or file:// path to upload
        #[arg(long)]
        image: Option<String>,
    },

    /// Delete a contact
    Delete {
        /// Contact ID
        id: String,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "phonebook=warn,phonebook_core=warn",
        1 => "phonebook=info,phonebook_core=info",
        _ => "phonebook=debug,phonebook_core=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig {
        base_url: cli.base_url,
        api_key: cli.api_key,
        timeout: Duration::from_secs(cli.timeout_secs),
        proxy_url: cli.proxy,
    };

    match cli.command {
        Commands::List { query, json } => {
            commands::contacts::list(&config, query.as_deref(), json).await?;
        }
        Commands::Show { id } => commands::contacts::show(&config, &id).await?,
        Commands::Add {
            first,
            last,
            phone,
            image,
        } => {
            commands::contacts::add(&config, &first, &last, &phone, image.as_deref()).await?;
        }
        Commands::Edit {
            id,
            first,
            last,
            phone,
            image,
        } => {
            let changes = commands::contacts::EditArgs {
                first,
                last,
                phone,
                image,
            };
            commands::contacts::edit(&config, &id, changes).await?;
        }
        Commands::Delete { id } => commands::contacts::delete(&config, &id).await?,
    }

    Ok(())
}

//! Direct message access, bypassing HTTP

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use msgboard_server::{DbConfig, Message, MessageStore, MySqlStore};

/// Arguments for the post command
#[derive(Parser, Debug)]
pub struct PostArgs {
    /// Message text, stored exactly as given
    pub text: String,
}

/// Print every stored message, one per line
pub async fn run_list() -> Result<()> {
    let store = MySqlStore::new(&DbConfig::from_env());
    let messages = store
        .list_messages()
        .await
        .context("Failed to list messages")?;

    let stdout = std::io::stdout();
    write_messages(&mut stdout.lock(), &messages)?;
    Ok(())
}

/// Insert one message
pub async fn run_post(args: PostArgs) -> Result<()> {
    let store = MySqlStore::new(&DbConfig::from_env());
    store
        .insert_message(Some(&args.text))
        .await
        .context("Failed to post message")?;

    tracing::info!("Message stored");
    Ok(())
}

fn write_messages<W: Write>(out: &mut W, messages: &[Message]) -> std::io::Result<()> {
    for message in messages {
        writeln!(out, "{}", message.text())?;
    }
    out.flush()
}

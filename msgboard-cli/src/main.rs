//! msgboard CLI - run and poke the message board
//!
//! - `serve`: the web app (list page + form submit)
//! - `list` / `post`: read and write messages directly against MySQL

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "msgboard",
    author,
    version,
    about = "A message board backed by MySQL",
    long_about = "Serve a page listing every stored message with a form to add more. \
                  Database settings come from MYSQL_HOST, MYSQL_USER, MYSQL_PASSWORD, \
                  MYSQL_DB and MYSQL_PORT (a .env file in the working directory is loaded first)."
)]
struct Cli {
    /// Debug logging, and error details on 500 pages when serving
    #[arg(long, global = true, env = "MSGBOARD_DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Print every stored message
    List,
    /// Store a new message
    Post(commands::messages::PostArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real env vars always win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, cli.debug).await,
        Commands::List => commands::run_list().await,
        Commands::Post(args) => commands::run_post(args).await,
    }
}

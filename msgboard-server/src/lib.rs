//! msgboard-server: a message list backed by MySQL
//!
//! `GET /` renders every stored message, `POST /submit` stores the
//! `new_message` form field and redirects back to the list.

pub mod config;
pub mod db;
pub mod http;

pub use config::DbConfig;
pub use db::{DbError, Message, MessageStore, MySqlStore};
pub use http::{run_server, ServerConfig, ServerError};

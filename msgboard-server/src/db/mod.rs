//! Database layer - message store and its MySQL implementation
//!
//! # Design Principles
//!
//! - One connection per operation, closed on every exit path - no pool
//! - Values are always bound through placeholders, never formatted into SQL
//! - No ORDER BY on the listing: rows come back in store order

pub mod mysql;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use sqlx::FromRow;

pub use mysql::MySqlStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// A row of the `messages` table.
///
/// `content` is `None` when the row was inserted without a form value.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Message {
    #[sqlx(rename = "message")]
    pub content: Option<String>,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Content as displayed; a NULL row shows as empty.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Storage for messages.
///
/// Handlers only see this trait, so tests can swap MySQL for a double.
#[async_trait]
pub trait MessageStore: Send + Sync + 'static {
    /// Every stored message, re-read from the store on each call.
    async fn list_messages(&self) -> Result<Vec<Message>, DbError>;

    /// Insert one message and commit.
    async fn insert_message(&self, content: Option<&str>) -> Result<(), DbError>;
}

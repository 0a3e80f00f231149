//! MySQL message store
//!
//! Opens a fresh connection for every operation and closes it before
//! returning, whether the statement succeeded or not.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tracing::{debug, warn};

use super::{DbError, Message, MessageStore};
use crate::config::DbConfig;

const LIST_SQL: &str = "SELECT message FROM messages";
const INSERT_SQL: &str = "INSERT INTO messages (message) VALUES (?)";

/// Message store backed by a MySQL `messages` table
#[derive(Debug, Clone)]
pub struct MySqlStore {
    options: MySqlConnectOptions,
}

impl MySqlStore {
    /// Build a store from config. Does not connect; the first
    /// operation surfaces any connectivity or auth failure.
    pub fn new(config: &DbConfig) -> Self {
        Self::with_options(config.connect_options())
    }

    pub fn with_options(options: MySqlConnectOptions) -> Self {
        Self { options }
    }

    async fn connect(&self) -> Result<MySqlConnection, DbError> {
        let conn = MySqlConnection::connect_with(&self.options).await?;
        Ok(conn)
    }
}

#[async_trait]
impl MessageStore for MySqlStore {
    async fn list_messages(&self) -> Result<Vec<Message>, DbError> {
        let mut conn = self.connect().await?;

        let result = sqlx::query_as::<_, Message>(LIST_SQL)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;

        let messages = result?;
        debug!(count = messages.len(), "listed messages");
        Ok(messages)
    }

    async fn insert_message(&self, content: Option<&str>) -> Result<(), DbError> {
        let mut conn = self.connect().await?;

        let result = insert_and_commit(&mut conn, content).await;
        release(conn).await;

        result?;
        debug!(null = content.is_none(), "inserted message");
        Ok(())
    }
}

async fn insert_and_commit(
    conn: &mut MySqlConnection,
    content: Option<&str>,
) -> Result<(), sqlx::Error> {
    let mut tx = conn.begin().await?;

    sqlx::query(INSERT_SQL)
        .bind(content)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}

/// Close the connection. A failed close still drops the socket.
async fn release(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        warn!("failed to close connection cleanly: {}", e);
    }
}

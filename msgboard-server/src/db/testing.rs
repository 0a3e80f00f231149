//! Store doubles for handler tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, Message, MessageStore};

/// Keeps rows in a Vec. Stands in for the `messages` table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Option<String>>>,
}

impl MemoryStore {
    pub fn rows(&self) -> Vec<Option<String>> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn list_messages(&self) -> Result<Vec<Message>, DbError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .map(|content| Message {
                content: content.clone(),
            })
            .collect())
    }

    async fn insert_message(&self, content: Option<&str>) -> Result<(), DbError> {
        self.rows.lock().unwrap().push(content.map(str::to_owned));
        Ok(())
    }
}

/// Fails every call, like an unreachable server.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl MessageStore for FailingStore {
    async fn list_messages(&self) -> Result<Vec<Message>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn insert_message(&self, _content: Option<&str>) -> Result<(), DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

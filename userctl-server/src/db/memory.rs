//! In-memory `UserStore` for router tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::repos::DbError;
use crate::db::store::UserStore;
use crate::models::User;

/// Ids start at 1 and are never reused, mirroring a BIGSERIAL column.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<User>, DbError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.get(&id).map(|u| User {
            email: None,
            ..u.clone()
        }))
    }

    async fn create(&self, name: Option<&str>) -> Result<Option<i64>, DbError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(
            id,
            User {
                id,
                name: name.map(str::to_owned),
                email: None,
            },
        );
        Ok(Some(id))
    }

    async fn update(&self, id: i64, name: Option<&str>) -> Result<bool, DbError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(user) => {
                user.name = name.map(str::to_owned);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.rows.remove(&id).is_some())
    }
}

/// Store whose inserts never produce a row.
#[derive(Debug, Default)]
pub struct NoInsertStore;

#[async_trait]
impl UserStore for NoInsertStore {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        Ok(Vec::new())
    }

    async fn get(&self, _id: i64) -> Result<Option<User>, DbError> {
        Ok(None)
    }

    async fn create(&self, _name: Option<&str>) -> Result<Option<i64>, DbError> {
        Ok(None)
    }

    async fn update(&self, _id: i64, _name: Option<&str>) -> Result<bool, DbError> {
        Ok(false)
    }

    async fn delete(&self, _id: i64) -> Result<bool, DbError> {
        Ok(false)
    }
}

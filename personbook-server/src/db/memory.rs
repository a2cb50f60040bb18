//! In-process person store
//!
//! Used by the router tests and by `personbook serve --memory`. Records
//! live only as long as the process.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::repos::{DbError, PersonStore};
use crate::models::{Person, PersonFields};

/// Mutex-guarded in-memory person store
pub struct MemoryPersonStore {
    inner: Mutex<Inner>,
    available: AtomicBool,
}

#[derive(Default)]
struct Inner {
    /// (insertion sequence, record)
    records: Vec<(u64, Person)>,
    next_seq: u64,
}

impl Default for MemoryPersonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the store going down or coming back.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(id: Uuid) -> DbError {
        DbError::NotFound {
            resource: "person",
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn list_all(&self) -> Result<Vec<Person>, DbError> {
        let inner = self.lock();
        let mut records: Vec<&(u64, Person)> = inner.records.iter().collect();
        records.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        Ok(records.into_iter().map(|(_, p)| p.clone()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Person, DbError> {
        self.lock()
            .records
            .iter()
            .find(|(_, p)| p.id == id)
            .map(|(_, p)| p.clone())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn insert(&self, fields: PersonFields) -> Result<Person, DbError> {
        let now = Utc::now();
        let person = Person {
            id: Uuid::new_v4(),
            name: fields.name,
            age: fields.age,
            gender: fields.gender,
            mobile_number: fields.mobile_number,
            created_at: now,
            updated_at: now,
        };

        let mut inner = self.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.records.push((seq, person.clone()));
        Ok(person)
    }

    async fn update_by_id(&self, id: Uuid, fields: PersonFields) -> Result<Person, DbError> {
        let mut inner = self.lock();
        let (_, person) = inner
            .records
            .iter_mut()
            .find(|(_, p)| p.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        person.name = fields.name;
        person.age = fields.age;
        person.gender = fields.gender;
        person.mobile_number = fields.mobile_number;
        person.updated_at = Utc::now();
        Ok(person.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Person, DbError> {
        let mut inner = self.lock();
        let index = inner
            .records
            .iter()
            .position(|(_, p)| p.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(inner.records.remove(index).1)
    }
}

//! Person store - the gateway between handlers and the database
//!
//! Each mutation is a single statement with `RETURNING`, so
//! update/delete report not-found without a separate lookup.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::db::migrations;
use crate::models::{Gender, Person, PersonFields};

/// Upper bound for the availability probe.
const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid stored row: {0}")]
    InvalidRow(String),
}

impl DbError {
    fn person_not_found(id: Uuid) -> Self {
        Self::NotFound {
            resource: "person",
            id: id.to_string(),
        }
    }
}

/// Gateway contract for person records (testable)
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Whether the store can serve requests right now. Must return quickly.
    async fn is_available(&self) -> bool;

    /// All persons, newest first.
    async fn list_all(&self) -> Result<Vec<Person>, DbError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Person, DbError>;

    /// Insert a person; the store assigns id and timestamps.
    async fn insert(&self, fields: PersonFields) -> Result<Person, DbError>;

    async fn update_by_id(&self, id: Uuid, fields: PersonFields) -> Result<Person, DbError>;

    /// Delete a person, returning the removed record.
    async fn delete_by_id(&self, id: Uuid) -> Result<Person, DbError>;
}

/// PostgreSQL-backed person store
pub struct PgPersonStore {
    pool: PgPool,
    schema: OnceCell<()>,
}

impl PgPersonStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            schema: OnceCell::new(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the table once per process, after the first successful probe.
    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        self.schema
            .get_or_try_init(|| migrations::run(&self.pool))
            .await
            .map(|_| ())
    }
}

const PERSON_COLUMNS: &str = "id, name, age, gender, mobile_number, created_at, updated_at";

fn person_from_row(row: &PgRow) -> Result<Person, DbError> {
    let gender: String = row.try_get("gender")?;
    let gender = gender
        .parse::<Gender>()
        .map_err(|e| DbError::InvalidRow(e.to_string()))?;

    Ok(Person {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
        gender,
        mobile_number: row.try_get("mobile_number")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn is_available(&self) -> bool {
        let probe = sqlx::query("SELECT 1").execute(&self.pool);
        match tokio::time::timeout(PROBE_TIMEOUT, probe).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "database probe failed");
                return false;
            }
            Err(_) => {
                tracing::warn!("database probe timed out");
                return false;
            }
        }

        if let Err(e) = self.ensure_schema().await {
            tracing::error!(error = %e, "failed to create persons table");
            return false;
        }
        true
    }

    async fn list_all(&self) -> Result<Vec<Person>, DbError> {
        let rows = sqlx::query(&format!(
            "SELECT {PERSON_COLUMNS} FROM persons ORDER BY created_at DESC, seq DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(person_from_row).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Person, DbError> {
        let row = sqlx::query(&format!("SELECT {PERSON_COLUMNS} FROM persons WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::person_not_found(id))?;

        person_from_row(&row)
    }

    async fn insert(&self, fields: PersonFields) -> Result<Person, DbError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO persons (id, name, age, gender, mobile_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PERSON_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&fields.name)
        .bind(fields.age)
        .bind(fields.gender.as_str())
        .bind(&fields.mobile_number)
        .fetch_one(&self.pool)
        .await?;

        let person = person_from_row(&row)?;
        tracing::debug!(id = %person.id, "person created");
        Ok(person)
    }

    async fn update_by_id(&self, id: Uuid, fields: PersonFields) -> Result<Person, DbError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE persons
            SET name = $2, age = $3, gender = $4, mobile_number = $5,
                updated_at = clock_timestamp()
            WHERE id = $1
            RETURNING {PERSON_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(fields.age)
        .bind(fields.gender.as_str())
        .bind(&fields.mobile_number)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::person_not_found(id))?;

        person_from_row(&row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Person, DbError> {
        let row = sqlx::query(&format!(
            "DELETE FROM persons WHERE id = $1 RETURNING {PERSON_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::person_not_found(id))?;

        let person = person_from_row(&row)?;
        tracing::debug!(id = %person.id, "person deleted");
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p personbook-server -- --ignored

    async fn store() -> PgPersonStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        let store = PgPersonStore::new(pool);
        assert!(store.is_available().await);
        store
    }

    fn fields(name: &str) -> PersonFields {
        PersonFields {
            name: name.into(),
            age: 30,
            gender: Gender::Other,
            mobile_number: "555-0100".into(),
        }
    }

    #[test]
    fn not_found_message_names_the_id() {
        let id = Uuid::nil();
        let err = DbError::person_not_found(id);
        assert_eq!(
            err.to_string(),
            "not found: person '00000000-0000-0000-0000-000000000000'"
        );
    }

    #[tokio::test]
    async fn unreachable_database_is_unavailable() {
        let pool = crate::db::create_lazy_pool("postgres://nobody@127.0.0.1:1/persondb").unwrap();
        let store = PgPersonStore::new(pool);
        assert!(!store.is_available().await);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_assigns_id_and_timestamps() {
        let store = store().await;
        let person = store.insert(fields("pg-insert")).await.unwrap();

        assert_eq!(person.name, "pg-insert");
        assert!(!person.id.is_nil());
        assert_eq!(person.created_at, person.updated_at);
        assert_eq!(store.get_by_id(person.id).await.unwrap(), person);

        store.delete_by_id(person.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_newest_first() {
        let store = store().await;
        let first = store.insert(fields("pg-first")).await.unwrap();
        let second = store.insert(fields("pg-second")).await.unwrap();

        let ids: Vec<Uuid> = store.list_all().await.unwrap().iter().map(|p| p.id).collect();
        let pos_first = ids.iter().position(|id| *id == first.id).unwrap();
        let pos_second = ids.iter().position(|id| *id == second.id).unwrap();
        assert!(pos_second < pos_first);

        store.delete_by_id(first.id).await.unwrap();
        store.delete_by_id(second.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_missing_id_are_not_found() {
        let store = store().await;
        let id = Uuid::new_v4();

        let err = store.update_by_id(id, fields("ghost")).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let err = store.delete_by_id(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}

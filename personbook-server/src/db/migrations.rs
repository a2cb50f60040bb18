//! Schema setup for the persons table

use sqlx::PgPool;

/// Create the persons table if it does not exist yet.
///
/// Ids are generated by the application. `seq` breaks ties between rows
/// created in the same microsecond so that newest-first listing is a
/// strict order.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring persons table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS persons (
            id UUID PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            name TEXT NOT NULL CHECK (name <> ''),
            age INTEGER NOT NULL CHECK (age >= 0),
            gender TEXT NOT NULL CHECK (gender IN ('Male', 'Female', 'Other')),
            mobile_number TEXT NOT NULL CHECK (mobile_number <> ''),
            created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_persons_created
        ON persons (created_at DESC, seq DESC)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

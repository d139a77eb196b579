// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Run all database migrations
///
/// Tables are created if missing. `reset_db` drops everything first, which is
/// only intended for local development.
pub async fn run_migrations(pool: &SqlitePool, reset_db: bool) -> Result<(), sqlx::Error> {
    if reset_db {
        warn!("reset_db enabled - dropping all tables and recreating schema");
        drop_all_tables(pool).await?;
    }

    create_user_tables(pool).await?;
    create_profile_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in ["educations", "experiences", "profiles", "users"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Email uniqueness is a schema-level constraint, not just a lookup-before-write
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            avatar TEXT,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_profile_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // UNIQUE(user_id) enforces the one-profile-per-user invariant in storage
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            company TEXT,
            website TEXT,
            location TEXT,
            status TEXT NOT NULL,
            skills TEXT NOT NULL DEFAULT '[]',
            bio TEXT,
            github_username TEXT,
            youtube TEXT,
            facebook TEXT,
            twitter TEXT,
            linkedin TEXT,
            instagram TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // seq preserves insertion order; listings read newest-first (prepend semantics)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS experiences (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            user_id TEXT NOT NULL,
            title TEXT NOT NULL,
            company TEXT NOT NULL,
            location TEXT,
            from_date TEXT NOT NULL,
            to_date TEXT,
            current INTEGER NOT NULL DEFAULT 0,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS educations (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            user_id TEXT NOT NULL,
            school TEXT NOT NULL,
            degree TEXT NOT NULL,
            field_of_study TEXT NOT NULL,
            from_date TEXT NOT NULL,
            to_date TEXT,
            current INTEGER NOT NULL DEFAULT 0,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_experiences_user_id ON experiences(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_educations_user_id ON educations(user_id)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(())
}

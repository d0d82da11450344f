//! Database migrations using a versioned migration pattern.
//!
//! Each migration runs exactly once and is tracked in the `schema_migrations` table.
//! Migrations are applied in order by version number.

use rusqlite::{params, Connection};

/// A database migration with a version number, name, and SQL to execute.
pub struct Migration {
    /// Unique version number (migrations run in order)
    pub version: i64,
    /// Human-readable name for the migration
    pub name: &'static str,
    /// SQL to execute (can be multiple statements)
    pub sql: &'static str,
}

/// All migrations in order. New migrations should be added at the end.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_app_state_table",
    sql: r#"
            CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
        "#,
}];

/// Create the schema_migrations table if it doesn't exist.
fn ensure_migrations_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Get the set of already-applied migration versions.
fn get_applied_versions(conn: &Connection) -> rusqlite::Result<std::collections::HashSet<i64>> {
    let mut stmt = conn.prepare("SELECT version FROM schema_migrations")?;
    let versions = stmt
        .query_map([], |row| row.get::<_, i64>(0))?
        .collect::<rusqlite::Result<std::collections::HashSet<i64>>>()?;
    Ok(versions)
}

/// Run all pending migrations.
pub fn run_migrations(conn: &mut Connection) -> rusqlite::Result<()> {
    ensure_migrations_table(conn)?;

    let applied = get_applied_versions(conn)?;

    for migration in MIGRATIONS {
        if applied.contains(&migration.version) {
            continue;
        }

        tracing::info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );

        // Migration SQL and its bookkeeping row commit together
        let now = chrono::Utc::now().to_rfc3339();
        let tx = conn.transaction()?;
        let applied = tx.execute_batch(migration.sql).and_then(|_| {
            tx.execute(
                "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
                params![migration.version, migration.name, now],
            )
        });
        if let Err(e) = applied.and_then(|_| tx.commit()) {
            tracing::error!(
                version = migration.version,
                name = migration.name,
                error = %e,
                "Migration failed"
            );
            return Err(e);
        }
    }

    Ok(())
}

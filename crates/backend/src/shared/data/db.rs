use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Character sheet schema. Every mapped profile column is TEXT so values
/// round-trip exactly as typed in the form.
const SCHEMA: &[(&str, &str)] = &[
    (
        "characters",
        r#"
        CREATE TABLE IF NOT EXISTS characters (
            character_id INTEGER PRIMARY KEY AUTOINCREMENT,
            handle TEXT NOT NULL DEFAULT '',
            role TEXT NOT NULL DEFAULT '',
            role_ability TEXT NOT NULL DEFAULT '',
            rank TEXT NOT NULL DEFAULT '',
            ability TEXT NOT NULL DEFAULT '',
            languages TEXT NOT NULL DEFAULT '',
            improvement_points TEXT NOT NULL DEFAULT '',
            cultural_region TEXT NOT NULL DEFAULT '',
            clothing_style TEXT NOT NULL DEFAULT '',
            hairstyle TEXT NOT NULL DEFAULT '',
            affectation TEXT NOT NULL DEFAULT '',
            last_modified TEXT
        );
    "#,
    ),
    (
        "background",
        r#"
        CREATE TABLE IF NOT EXISTS background (
            background_id INTEGER PRIMARY KEY AUTOINCREMENT,
            character_id INTEGER NOT NULL REFERENCES characters(character_id) ON DELETE CASCADE,
            family_background TEXT NOT NULL DEFAULT '',
            childhood_environment TEXT NOT NULL DEFAULT ''
        );
    "#,
    ),
    (
        "reputation",
        r#"
        CREATE TABLE IF NOT EXISTS reputation (
            reputation_id INTEGER PRIMARY KEY AUTOINCREMENT,
            character_id INTEGER NOT NULL REFERENCES characters(character_id) ON DELETE CASCADE,
            reputation_score TEXT NOT NULL DEFAULT '',
            reputation_event TEXT NOT NULL DEFAULT ''
        );
    "#,
    ),
    (
        "contacts",
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            contact_id INTEGER PRIMARY KEY AUTOINCREMENT,
            character_id INTEGER NOT NULL REFERENCES characters(character_id) ON DELETE CASCADE,
            contact_type TEXT NOT NULL,
            contact_number INTEGER NOT NULL DEFAULT 0,
            name TEXT NOT NULL,
            who_wronged TEXT NOT NULL DEFAULT '',
            what_caused TEXT NOT NULL DEFAULT '',
            what_throw_down TEXT NOT NULL DEFAULT '',
            what_happened TEXT NOT NULL DEFAULT '',
            notes TEXT NOT NULL DEFAULT ''
        );
    "#,
    ),
    (
        "critical_injuries",
        r#"
        CREATE TABLE IF NOT EXISTS critical_injuries (
            injury_id INTEGER PRIMARY KEY AUTOINCREMENT,
            character_id INTEGER NOT NULL REFERENCES characters(character_id) ON DELETE CASCADE,
            injury_name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            healed INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "addictions",
        r#"
        CREATE TABLE IF NOT EXISTS addictions (
            addiction_id INTEGER PRIMARY KEY AUTOINCREMENT,
            character_id INTEGER NOT NULL REFERENCES characters(character_id) ON DELETE CASCADE,
            substance TEXT NOT NULL,
            severity TEXT NOT NULL DEFAULT 'mild',
            description TEXT NOT NULL DEFAULT ''
        );
    "#,
    ),
];

/// Create any missing table of the character sheet schema
pub async fn bootstrap_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    for (table, sql) in SCHEMA {
        tracing::debug!("Ensuring table {} exists", table);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/tracker.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Single-connection in-memory database with the schema applied
#[cfg(test)]
pub async fn memory_database() -> anyhow::Result<DatabaseConnection> {
    let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

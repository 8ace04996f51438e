//! SQLite persistence for projects and postings.
//!
//! The store keeps a single connection behind a mutex; handlers clone the
//! `Store` handle freely and serialize their access through it. The schema
//! is created on open with `CREATE TABLE IF NOT EXISTS`, so opening an
//! existing database is a no-op for its data.
//!
//! Tables:
//!
//! * `projects` - client submissions with name, email, title, description,
//!   a status defaulting to `Pending` and a creation timestamp.
//! * `postings` - admin-created job postings visible to freelancers, each
//!   with a title, description and a timestamp.

pub mod models;

use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use self::models::TIMESTAMP_FORMAT;
pub use self::models::{Posting, Project, ProjectStatus};

/// Error type for store operations
#[derive(Debug)]
pub enum StoreError {
    /// Error opening the database file
    OpenError(String),
    /// Error creating the schema
    SchemaError(String),
    /// Error executing a query
    QueryError(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::OpenError(msg) => write!(f, "Open error: {}", msg),
            StoreError::SchemaError(msg) => write!(f, "Schema error: {}", msg),
            StoreError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Shared handle to the SQLite database
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| StoreError::OpenError(e.to_string()))?;
        init_schema(&conn)?;
        Ok(Store {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert a new project submission. The status starts as `Pending` and
    /// the timestamp is taken from the server clock. Returns the row id.
    pub async fn add_project(
        &self,
        name: &str,
        email: &str,
        title: &str,
        description: &str,
    ) -> Result<i64, StoreError> {
        let conn = self.conn.lock().await;
        insert_project(&conn, name, email, title, description)
    }

    /// All project submissions, newest first.
    pub async fn all_projects(&self) -> Result<Vec<Project>, StoreError> {
        let conn = self.conn.lock().await;
        select_projects(&conn)
    }

    /// Insert a new job posting. Returns the row id.
    pub async fn add_posting(&self, title: &str, description: &str) -> Result<i64, StoreError> {
        let conn = self.conn.lock().await;
        insert_posting(&conn, title, description)
    }

    /// All job postings, newest first.
    pub async fn all_postings(&self) -> Result<Vec<Posting>, StoreError> {
        let conn = self.conn.lock().await;
        select_postings(&conn)
    }

    /// Change the status of a project. Returns whether a row was updated;
    /// an id that matches nothing is a no-op, not an error.
    pub async fn set_project_status(
        &self,
        id: i64,
        status: ProjectStatus,
    ) -> Result<bool, StoreError> {
        let conn = self.conn.lock().await;
        update_project_status(&conn, id, status)
    }
}

/// Create the tables if they do not already exist. Safe to call repeatedly.
fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            status TEXT DEFAULT 'Pending',
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS postings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            posted_at TEXT NOT NULL
        );",
    )
    .map_err(|e| StoreError::SchemaError(e.to_string()))
}

/// Current server-local time in the stored text format
fn now_timestamp() -> String {
    Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp. The fractional part is optional because
/// ISO-8601 writers drop it when it is zero.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, StoreError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| StoreError::QueryError(format!("Bad timestamp '{}': {}", raw, e)))
}

fn insert_project(
    conn: &Connection,
    name: &str,
    email: &str,
    title: &str,
    description: &str,
) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO projects (name, email, title, description, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            name,
            email,
            title,
            description,
            ProjectStatus::Pending.as_str(),
            now_timestamp()
        ],
    )
    .map_err(|e| StoreError::QueryError(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

fn select_projects(conn: &Connection) -> Result<Vec<Project>, StoreError> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, email, title, description, status, created_at
             FROM projects
             ORDER BY datetime(created_at) DESC",
        )
        .map_err(|e| StoreError::QueryError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, String>(6)?,
            ))
        })
        .map_err(|e| StoreError::QueryError(e.to_string()))?;

    let mut projects = Vec::new();
    for row in rows {
        let (id, name, email, title, description, status, created_at) =
            row.map_err(|e| StoreError::QueryError(e.to_string()))?;
        projects.push(Project {
            id,
            name,
            email,
            title,
            description,
            status: ProjectStatus::from_db(status.as_deref().unwrap_or("")),
            created_at: parse_timestamp(&created_at)?,
        });
    }
    Ok(projects)
}

fn insert_posting(conn: &Connection, title: &str, description: &str) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO postings (title, description, posted_at) VALUES (?1, ?2, ?3)",
        params![title, description, now_timestamp()],
    )
    .map_err(|e| StoreError::QueryError(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

fn select_postings(conn: &Connection) -> Result<Vec<Posting>, StoreError> {
    let mut stmt = conn
        .prepare(
            "SELECT id, title, description, posted_at
             FROM postings
             ORDER BY datetime(posted_at) DESC",
        )
        .map_err(|e| StoreError::QueryError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
        .map_err(|e| StoreError::QueryError(e.to_string()))?;

    let mut postings = Vec::new();
    for row in rows {
        let (id, title, description, posted_at) =
            row.map_err(|e| StoreError::QueryError(e.to_string()))?;
        postings.push(Posting {
            id,
            title,
            description,
            posted_at: parse_timestamp(&posted_at)?,
        });
    }
    Ok(postings)
}

fn update_project_status(
    conn: &Connection,
    id: i64,
    status: ProjectStatus,
) -> Result<bool, StoreError> {
    let changed = conn
        .execute(
            "UPDATE projects SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )
        .map_err(|e| StoreError::QueryError(e.to_string()))?;
    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    // Test schema creation is idempotent
    #[test]
    fn test_init_schema_idempotent() {
        let conn = test_conn();
        init_schema(&conn).unwrap();
    }

    // Test inserting and reading back a project submission
    #[test]
    fn test_insert_and_select_project() {
        let conn = test_conn();
        let id = insert_project(&conn, "Ada", "ada@example.com", "Site", "A new site").unwrap();
        assert!(id > 0);

        let projects = select_projects(&conn).unwrap();
        assert_eq!(projects.len(), 1);
        let project = &projects[0];
        assert_eq!(project.id, id);
        assert_eq!(project.name, "Ada");
        assert_eq!(project.email, "ada@example.com");
        assert_eq!(project.status, ProjectStatus::Pending);
    }

    // Project listings come back newest first
    #[test]
    fn test_projects_newest_first() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO projects (name, email, title, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                "Old",
                "old@example.com",
                "Old project",
                "submitted first",
                "2024-01-01T08:00:00.000000"
            ],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO projects (name, email, title, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                "New",
                "new@example.com",
                "New project",
                "submitted later",
                "2024-06-01T08:00:00.000000"
            ],
        )
        .unwrap();

        let projects = select_projects(&conn).unwrap();
        assert_eq!(projects[0].name, "New");
        assert_eq!(projects[1].name, "Old");
    }

    // A row inserted without an explicit status picks up the Pending default
    #[test]
    fn test_status_column_default() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO projects (name, email, title, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                "Ada",
                "ada@example.com",
                "Site",
                "A new site",
                "2024-01-01T08:00:00.000000"
            ],
        )
        .unwrap();

        let projects = select_projects(&conn).unwrap();
        assert_eq!(projects[0].status, ProjectStatus::Pending);
    }

    // Unknown status text in the database reads back as Pending
    #[test]
    fn test_unknown_status_reads_as_pending() {
        let conn = test_conn();
        let id = insert_project(&conn, "Ada", "ada@example.com", "Site", "A new site").unwrap();
        conn.execute(
            "UPDATE projects SET status = 'Archived' WHERE id = ?1",
            params![id],
        )
        .unwrap();

        let projects = select_projects(&conn).unwrap();
        assert_eq!(projects[0].status, ProjectStatus::Pending);
    }

    // Test updating a project status
    #[test]
    fn test_update_project_status() {
        let conn = test_conn();
        let id = insert_project(&conn, "Ada", "ada@example.com", "Site", "A new site").unwrap();

        assert!(update_project_status(&conn, id, ProjectStatus::Accepted).unwrap());
        let projects = select_projects(&conn).unwrap();
        assert_eq!(projects[0].status, ProjectStatus::Accepted);
    }

    // A status update for a missing id reports no change
    #[test]
    fn test_update_missing_project() {
        let conn = test_conn();
        assert!(!update_project_status(&conn, 999, ProjectStatus::Declined).unwrap());
    }

    // Test inserting and listing postings
    #[test]
    fn test_insert_and_select_postings() {
        let conn = test_conn();
        insert_posting(&conn, "Rust developer", "Build a web app").unwrap();

        let postings = select_postings(&conn).unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title, "Rust developer");
    }

    // Posting listings come back newest first
    #[test]
    fn test_postings_newest_first() {
        let conn = test_conn();
        conn.execute(
            "INSERT INTO postings (title, description, posted_at) VALUES (?1, ?2, ?3)",
            params!["First", "posted first", "2024-01-01T08:00:00.000000"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO postings (title, description, posted_at) VALUES (?1, ?2, ?3)",
            params!["Second", "posted later", "2024-06-01T08:00:00.000000"],
        )
        .unwrap();

        let postings = select_postings(&conn).unwrap();
        assert_eq!(postings[0].title, "Second");
        assert_eq!(postings[1].title, "First");
    }

    // Rows survive closing and reopening the database file
    #[test]
    fn test_reopen_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rallypoint.db");
        {
            let conn = Connection::open(&path).unwrap();
            init_schema(&conn).unwrap();
            insert_posting(&conn, "Rust developer", "Build a web app").unwrap();
        }

        let conn = Connection::open(&path).unwrap();
        init_schema(&conn).unwrap();
        let postings = select_postings(&conn).unwrap();
        assert_eq!(postings.len(), 1);
    }

    // Timestamp parsing accepts values with and without a fractional part
    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-01-01T08:00:00.123456").is_ok());
        assert!(parse_timestamp("2024-01-01T08:00:00").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }
}

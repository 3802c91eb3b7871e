//! Database connection management
//!
//! Opening and configuring the SQLite connection handed to `ReviewStore`

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open the SQLite database at the given path, creating the file if needed
///
/// # Errors
/// Returns `Persistence` if the file cannot be opened.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
///
/// # Errors
/// Returns `Persistence` if the connection cannot be created.
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Apply connection settings for file-backed databases
///
/// # Errors
/// Returns `Persistence` if a pragma statement fails.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(from_rusqlite)?;

    // WAL keeps readers unblocked while a write commits; the pragma reports
    // the resulting mode as a row, so it must go through query_row
    conn.query_row("PRAGMA journal_mode = WAL", [], |_row| Ok(()))
        .map_err(from_rusqlite)?;

    Ok(())
}

//! SQLite repository for review records
//!
//! Owns the connection and the identity map, and implements the persistence
//! lifecycle: table setup, insert/update/delete inside scoped transactions,
//! and hydration of fetched rows into cached handles.

use std::cell::RefCell;
use std::rc::Rc;

use appraise_core::{AppraiseError, Review};
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::{from_rusqlite, Result};
use crate::identity::{IdentityMap, ReviewHandle};

/// One fetched row of the reviews table, before hydration
struct ReviewRow {
    id: i64,
    year: i32,
    summary: String,
    employee_id: i64,
}

/// SQLite-backed store for Review entities
///
/// Single-threaded by design: the store owns its connection and hands out
/// `Rc<RefCell<Review>>` handles. Loading the same primary key twice through
/// the same store returns the same allocation (identity-map law).
pub struct ReviewStore {
    conn: Connection,
    identity: IdentityMap,
}

impl ReviewStore {
    /// Create a store over an open connection with an empty identity map
    pub fn new(conn: Connection) -> Self {
        Self {
            conn,
            identity: IdentityMap::new(),
        }
    }

    /// Create a store with a caller-supplied identity map
    pub fn with_identity(conn: Connection, identity: IdentityMap) -> Self {
        Self { conn, identity }
    }

    /// The identity map backing this store
    pub fn identity(&self) -> &IdentityMap {
        &self.identity
    }

    /// Forget every cached handle (test hook; persisted rows are untouched)
    pub fn clear_identity(&mut self) {
        self.identity.clear();
    }

    /// Ensure the reviews table exists
    ///
    /// No-op if the table is already present.
    ///
    /// # Errors
    /// Returns `Persistence` if the DDL statement fails.
    pub fn create_table(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id INTEGER PRIMARY KEY,
                    year INTEGER,
                    summary TEXT,
                    employee_id INTEGER
                )",
                [],
            )
            .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Remove the reviews table if present
    ///
    /// # Errors
    /// Returns `Persistence` if the DDL statement fails.
    pub fn drop_table(&self) -> Result<()> {
        self.conn
            .execute("DROP TABLE IF EXISTS reviews", [])
            .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Persist a review
    ///
    /// A transient review is inserted, receives the store-assigned primary
    /// key, and is registered in the identity map. A persisted review is
    /// forwarded to [`update`](Self::update).
    ///
    /// # Errors
    /// Returns `Persistence` if a statement or commit fails.
    pub fn save(&mut self, review: &ReviewHandle) -> Result<()> {
        if review.borrow().is_persisted() {
            return self.update(review);
        }

        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        {
            let r = review.borrow();
            tx.execute(
                "INSERT INTO reviews (year, summary, employee_id) VALUES (?1, ?2, ?3)",
                params![r.year(), r.summary(), r.employee_id()],
            )
            .map_err(from_rusqlite)?;
        }
        let id = tx.last_insert_rowid();
        tx.commit().map_err(from_rusqlite)?;

        review.borrow_mut().mark_persisted(id);
        self.identity.insert(id, Rc::clone(review));

        tracing::debug!(review_id = id, "inserted review");
        Ok(())
    }

    /// Construct a validated review and persist it immediately
    ///
    /// # Errors
    /// * `InvalidYear` / `InvalidSummary` / `InvalidEmployeeId` - if a field
    ///   fails validation
    /// * `Persistence` - if the insert fails
    pub fn create(&mut self, year: i32, summary: &str, employee_id: i64) -> Result<ReviewHandle> {
        let review = Rc::new(RefCell::new(Review::new(year, summary, employee_id)?));
        self.save(&review)?;
        Ok(review)
    }

    /// Look up one review by primary key
    ///
    /// Returns the cached handle when the id is already registered,
    /// otherwise hydrates a fresh instance from the row. None if no row
    /// matches.
    ///
    /// # Errors
    /// Returns `Persistence` if the query fails.
    pub fn find_by_id(&mut self, id: i64) -> Result<Option<ReviewHandle>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, year, summary, employee_id FROM reviews WHERE id = ?1",
                params![id],
                |row| {
                    Ok(ReviewRow {
                        id: row.get(0)?,
                        year: row.get(1)?,
                        summary: row.get(2)?,
                        employee_id: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(from_rusqlite)?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row)?)),
            None => Ok(None),
        }
    }

    /// Fetch every review in the table
    ///
    /// Rows come back in the backing store's scan order; no ordering is
    /// guaranteed. Each row is routed through the identity map.
    ///
    /// # Errors
    /// Returns `Persistence` if the query fails.
    pub fn get_all(&mut self) -> Result<Vec<ReviewHandle>> {
        let rows: Vec<ReviewRow> = {
            let mut stmt = self
                .conn
                .prepare("SELECT id, year, summary, employee_id FROM reviews")
                .map_err(from_rusqlite)?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(ReviewRow {
                        id: row.get(0)?,
                        year: row.get(1)?,
                        summary: row.get(2)?,
                        employee_id: row.get(3)?,
                    })
                })
                .map_err(from_rusqlite)?
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(from_rusqlite)?;
            rows
        };

        rows.into_iter().map(|row| self.hydrate(row)).collect()
    }

    /// Overwrite the backing row with the review's current field values
    ///
    /// # Errors
    /// * `NotPersisted` - if the review has never been saved
    /// * `Persistence` - if the statement or commit fails
    pub fn update(&mut self, review: &ReviewHandle) -> Result<()> {
        let (id, year, summary, employee_id) = {
            let r = review.borrow();
            let id = r.id().ok_or_else(|| AppraiseError::NotPersisted {
                op: "update".to_string(),
            })?;
            (id, r.year(), r.summary().to_string(), r.employee_id())
        };

        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        tx.execute(
            "UPDATE reviews SET year = ?1, summary = ?2, employee_id = ?3 WHERE id = ?4",
            params![year, summary, employee_id, id],
        )
        .map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(review_id = id, "updated review");
        Ok(())
    }

    /// Delete the backing row and demote the review to transient
    ///
    /// The identity-map entry is required up front and checked before the
    /// row is touched, so a rejected call leaves both the table and the map
    /// unchanged. On success the entry is evicted and the review's id is
    /// cleared; the instance itself stays usable.
    ///
    /// # Errors
    /// * `NotPersisted` - if the review has never been saved
    /// * `NotRegistered` - if the id has no identity-map entry
    /// * `Persistence` - if the statement or commit fails
    pub fn delete(&mut self, review: &ReviewHandle) -> Result<()> {
        let id = review.borrow().id().ok_or_else(|| AppraiseError::NotPersisted {
            op: "delete".to_string(),
        })?;

        if !self.identity.contains(id) {
            return Err(AppraiseError::NotRegistered { review_id: id });
        }

        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        tx.execute("DELETE FROM reviews WHERE id = ?1", params![id])
            .map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)?;

        self.identity.remove(id);
        review.borrow_mut().mark_transient();

        tracing::debug!(review_id = id, "deleted review");
        Ok(())
    }

    /// Turn a fetched row into a handle, reusing the cached instance when
    /// the primary key is already registered
    fn hydrate(&mut self, row: ReviewRow) -> Result<ReviewHandle> {
        if let Some(existing) = self.identity.get(row.id) {
            return Ok(existing);
        }

        let mut review = Review::new(row.year, row.summary, row.employee_id)?;
        review.mark_persisted(row.id);

        let handle = Rc::new(RefCell::new(review));
        self.identity.insert(row.id, Rc::clone(&handle));

        Ok(handle)
    }
}

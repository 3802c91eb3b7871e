use appraise_store::ReviewStore;
use rusqlite::Connection;

/// Create a ReviewStore over a fresh in-memory database with the table ready
#[allow(dead_code)]
pub fn new_store() -> ReviewStore {
    let conn = Connection::open_in_memory().unwrap();
    let store = ReviewStore::new(conn);
    store.create_table().unwrap();
    store
}

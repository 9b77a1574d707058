//! SQL schema for the Folk SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout so a later change can tell old files apart.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids of deleted rows from being handed out again.
CREATE TABLE IF NOT EXISTS persons (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    birthday  TEXT NOT NULL,   -- ISO 8601 calendar date, YYYY-MM-DD
    phone     TEXT,
    nin       TEXT             -- lookup key, deliberately not UNIQUE
);

CREATE INDEX IF NOT EXISTS persons_nin_idx ON persons(nin);

PRAGMA user_version = 1;
";

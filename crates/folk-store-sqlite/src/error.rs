//! Error type for `folk-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// Attempted to update a person id that has no row.
  #[error("person not found: {0}")]
  PersonNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

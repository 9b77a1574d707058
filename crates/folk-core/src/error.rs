//! Error types for `folk-core`.

use thiserror::Error;

use crate::validate::Violations;

#[derive(Debug, Error)]
pub enum Error {
  /// Identity is assigned by the store; a new record must not carry one.
  #[error("a new person must not carry an id (got {0})")]
  IdSupplied(i64),

  #[error(transparent)]
  Invalid(#[from] Violations),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! The `PersonStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `folk-store-sqlite`).
//! Higher layers (`folk-api`, `folk-server`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::person::Person;

/// Abstraction over a relational table of persons keyed by an
/// auto-incrementing integer id.
///
/// `save` and `delete_by_id` must be atomic: a failed call leaves the store
/// exactly as it was.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve a person by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Retrieve a person whose `nin` equals `nin`.
  ///
  /// Records without a NIN never match. NINs are not unique; when several
  /// records share one, which of them is returned is undefined.
  fn find_by_nin<'a>(
    &'a self,
    nin: &'a str,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + 'a;

  /// List every person. Ordering is backend-defined.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Insert `person` when its `id` is `None` (assigning a fresh id), or
  /// overwrite the row with that id. Returns the persisted person.
  ///
  /// Saving with an id that has no row is an error.
  fn save(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Remove the person with this id. Deleting a missing id is a no-op.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

//! JSON REST API for Folk.
//!
//! Exposes an axum [`Router`] backed by any [`folk_core::store::PersonStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folk_api::api_router(service.clone()))
//! ```

pub mod error;
pub mod persons;

use axum::{Router, routing::get};
use folk_core::{service::PersonService, store::PersonStore};

pub use error::ApiError;

/// Build the API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: PersonService<S>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route("/persons", get(persons::list::<S>).post(persons::create::<S>))
    .route(
      "/persons/{id}",
      get(persons::get_one::<S>)
        .put(persons::update::<S>)
        .delete(persons::delete_one::<S>),
    )
    .route("/persons/nin/{nin}", get(persons::get_by_nin::<S>))
    .with_state(service)
}

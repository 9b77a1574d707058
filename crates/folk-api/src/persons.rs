//! Handlers for `/persons` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/persons` | 200 + array, possibly empty |
//! | `GET`    | `/persons/{id}` | 404 if not found |
//! | `GET`    | `/persons/nin/{nin}` | 404 if not found |
//! | `POST`   | `/persons` | Body: [`PersonPayload`] without `id`; 201 + stored person |
//! | `PUT`    | `/persons/{id}` | Body: [`PersonPayload`]; 202 + updated person, 404 first |
//! | `DELETE` | `/persons/{id}` | Always 204 |

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use folk_core::{
  person::{Person, PersonPayload},
  service::PersonService,
  store::PersonStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /persons`
pub async fn list<S>(
  State(service): State<PersonService<S>>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
{
  let persons = service.find_all().await.map_err(ApiError::store)?;
  Ok(Json(persons))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /persons/{id}`
pub async fn get_one<S>(
  State(service): State<PersonService<S>>,
  path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  let Path(id) = path?;
  let person = service
    .find_by_id(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(person))
}

/// `GET /persons/nin/{nin}`
pub async fn get_by_nin<S>(
  State(service): State<PersonService<S>>,
  path: Result<Path<String>, PathRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  let Path(nin) = path?;
  let person = service
    .find_by_nin(&nin)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(person))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /persons`: returns 201 + the stored [`Person`].
///
/// A payload carrying an `id` is rejected before the field rules run.
pub async fn create<S>(
  State(service): State<PersonService<S>>,
  body: Result<Json<PersonPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
{
  let Json(payload) = body?;
  let person = payload.into_new()?;
  let created = service.save(person).await.map_err(ApiError::store)?;
  tracing::info!(id = ?created.id, "created person");
  Ok((StatusCode::CREATED, Json(created)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /persons/{id}`: returns 202 + the updated [`Person`].
///
/// Existence is checked before the body is even parsed, so an unknown id is
/// always a 404.
pub async fn update<S>(
  State(service): State<PersonService<S>>,
  path: Result<Path<i64>, PathRejection>,
  body: Result<Json<PersonPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
{
  let Path(id) = path?;
  let mut person = service
    .find_by_id(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound)?;

  let Json(payload) = body?;
  person.apply(payload)?;

  let updated = service.save(person).await.map_err(ApiError::store)?;
  tracing::info!(id, "updated person");
  Ok((StatusCode::ACCEPTED, Json(updated)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /persons/{id}`: 204 whether or not the person existed.
pub async fn delete_one<S>(
  State(service): State<PersonService<S>>,
  path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore,
{
  let Path(id) = path?;
  service.delete_by_id(id).await.map_err(ApiError::store)?;
  Ok(StatusCode::NO_CONTENT)
}

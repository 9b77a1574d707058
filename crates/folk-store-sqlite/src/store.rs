//! [`SqliteStore`], the SQLite implementation of [`PersonStore`].

use std::path::Path;

use folk_core::{person::Person, store::PersonStore};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{PERSON_COLUMNS, RawPerson, encode_date},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Folk person store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a new row and return `person` with the assigned id.
  async fn insert(&self, person: Person) -> Result<Person> {
    let name     = person.name.clone();
    let birthday = encode_date(person.birthday);
    let phone    = person.phone.clone();
    let nin      = person.nin.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO persons (name, birthday, phone, nin) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name, birthday, phone, nin],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await?;

    Ok(Person { id: Some(id), ..person })
  }

  /// Overwrite every column of the row with `id`.
  async fn update(&self, id: i64, person: Person) -> Result<Person> {
    let name     = person.name.clone();
    let birthday = encode_date(person.birthday);
    let phone    = person.phone.clone();
    let nin      = person.nin.clone();

    let changed: usize = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let changed = tx.execute(
          "UPDATE persons SET name = ?1, birthday = ?2, phone = ?3, nin = ?4
           WHERE id = ?5",
          rusqlite::params![name, birthday, phone, nin, id],
        )?;
        tx.commit()?;
        Ok(changed)
      })
      .await?;

    if changed == 0 {
      return Err(Error::PersonNotFound(id));
    }
    Ok(person)
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn find_by_id(&self, id: i64) -> Result<Option<Person>> {
    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {PERSON_COLUMNS} FROM persons WHERE id = ?1"),
            rusqlite::params![id],
            RawPerson::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn find_by_nin(&self, nin: &str) -> Result<Option<Person>> {
    let nin = nin.to_owned();

    // `nin = ?1` is never true for a NULL column, so persons without a NIN
    // cannot match.
    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {PERSON_COLUMNS} FROM persons WHERE nin = ?1 LIMIT 1"),
            rusqlite::params![nin],
            RawPerson::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn find_all(&self) -> Result<Vec<Person>> {
    let raws: Vec<RawPerson> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {PERSON_COLUMNS} FROM persons ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn save(&self, person: Person) -> Result<Person> {
    match person.id {
      None => self.insert(person).await,
      Some(id) => self.update(id, person).await,
    }
  }

  async fn delete_by_id(&self, id: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM persons WHERE id = ?1", rusqlite::params![id])?;
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

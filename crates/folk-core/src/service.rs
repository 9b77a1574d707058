//! [`PersonService`], the layer HTTP handlers talk to.
//!
//! Reads forward straight to the store. Writes rely on the store's atomic
//! `save` / `delete_by_id`; the service adds no business rules of its own.

use std::sync::Arc;

use tracing::debug;

use crate::{person::Person, store::PersonStore};

/// Thin facade over a shared [`PersonStore`].
///
/// Cloning is cheap; the store is reference-counted.
pub struct PersonService<S> {
  store: Arc<S>,
}

impl<S> Clone for PersonService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: PersonStore> PersonService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn find_all(&self) -> Result<Vec<Person>, S::Error> {
    debug!("listing persons");
    self.store.find_all().await
  }

  pub async fn find_by_id(&self, id: i64) -> Result<Option<Person>, S::Error> {
    debug!(id, "finding person by id");
    self.store.find_by_id(id).await
  }

  pub async fn find_by_nin(&self, nin: &str) -> Result<Option<Person>, S::Error> {
    debug!(nin, "finding person by nin");
    self.store.find_by_nin(nin).await
  }

  /// Persist `person` in a single transaction.
  pub async fn save(&self, person: Person) -> Result<Person, S::Error> {
    debug!(id = ?person.id, "saving person");
    self.store.save(person).await
  }

  /// Delete by id in a single transaction; missing ids are ignored.
  pub async fn delete_by_id(&self, id: i64) -> Result<(), S::Error> {
    debug!(id, "deleting person");
    self.store.delete_by_id(id).await
  }
}

#[cfg(test)]
mod tests {
  use std::{io, sync::Mutex};

  use chrono::NaiveDate;

  use super::*;

  /// Vec-backed store; optionally fails every write.
  #[derive(Default)]
  struct MemoryStore {
    rows:        Mutex<Vec<Person>>,
    fail_writes: bool,
  }

  impl MemoryStore {
    fn check_writable(&self) -> io::Result<()> {
      if self.fail_writes {
        return Err(io::Error::other("store offline"));
      }
      Ok(())
    }
  }

  impl PersonStore for MemoryStore {
    type Error = io::Error;

    async fn find_by_id(&self, id: i64) -> io::Result<Option<Person>> {
      let rows = self.rows.lock().unwrap();
      Ok(rows.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn find_by_nin(&self, nin: &str) -> io::Result<Option<Person>> {
      let rows = self.rows.lock().unwrap();
      Ok(rows.iter().find(|p| p.nin.as_deref() == Some(nin)).cloned())
    }

    async fn find_all(&self) -> io::Result<Vec<Person>> {
      Ok(self.rows.lock().unwrap().clone())
    }

    async fn save(&self, mut person: Person) -> io::Result<Person> {
      self.check_writable()?;
      let mut rows = self.rows.lock().unwrap();
      match person.id {
        None => {
          let next = rows.iter().filter_map(|p| p.id).max().unwrap_or(0) + 1;
          person.id = Some(next);
          rows.push(person.clone());
        }
        Some(id) => {
          let slot = rows
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such person"))?;
          *slot = person.clone();
        }
      }
      Ok(person)
    }

    async fn delete_by_id(&self, id: i64) -> io::Result<()> {
      self.check_writable()?;
      self.rows.lock().unwrap().retain(|p| p.id != Some(id));
      Ok(())
    }
  }

  fn person(name: &str, nin: Option<&str>) -> Person {
    Person {
      id:       None,
      name:     name.into(),
      birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
      phone:    None,
      nin:      nin.map(Into::into),
    }
  }

  fn service() -> PersonService<MemoryStore> {
    PersonService::new(Arc::new(MemoryStore::default()))
  }

  #[tokio::test]
  async fn save_then_find_by_id() {
    let svc = service();
    let saved = svc.save(person("Agent Smith", None)).await.unwrap();
    assert_eq!(saved.id, Some(1));

    let found = svc.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert!(svc.find_by_id(2).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn find_by_nin_forwards_to_store() {
    let svc = service();
    svc.save(person("Agent Smith", Some("AB123456C"))).await.unwrap();

    let hit = svc.find_by_nin("AB123456C").await.unwrap();
    assert_eq!(hit.map(|p| p.name).as_deref(), Some("Agent Smith"));
    assert!(svc.find_by_nin("XY987654Z").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn find_all_and_delete() {
    let svc = service();
    svc.save(person("One", None)).await.unwrap();
    svc.save(person("Two", None)).await.unwrap();
    assert_eq!(svc.find_all().await.unwrap().len(), 2);

    svc.delete_by_id(1).await.unwrap();
    svc.delete_by_id(1).await.unwrap();
    let rest = svc.find_all().await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].name, "Two");
  }

  #[tokio::test]
  async fn store_failures_propagate() {
    let svc = PersonService::new(Arc::new(MemoryStore {
      fail_writes: true,
      ..Default::default()
    }));
    let err = svc.save(person("Agent Smith", None)).await.unwrap_err();
    assert_eq!(err.to_string(), "store offline");
    assert!(svc.delete_by_id(1).await.is_err());
    assert!(svc.find_all().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn clones_share_the_store() {
    let svc = service();
    let other = svc.clone();
    svc.save(person("Agent Smith", None)).await.unwrap();
    assert_eq!(other.find_all().await.unwrap().len(), 1);
  }
}

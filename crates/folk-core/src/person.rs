//! Person, the single entity managed by Folk.
//!
//! A [`Person`] always holds a validated name and birthday. Client input
//! arrives as a [`PersonPayload`], where every field is optional, and only
//! becomes a `Person` by passing [`PersonPayload::validate`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, validate::ValidPerson};

// ─── Person ──────────────────────────────────────────────────────────────────

/// A person record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  /// Store-assigned identity; `None` until the first save.
  pub id:       Option<i64>,
  pub name:     String,
  pub birthday: NaiveDate,
  /// Exactly ten decimal digits when present.
  pub phone:    Option<String>,
  /// National Identifying Number, e.g. `AB123456C`. Not unique.
  pub nin:      Option<String>,
}

impl Person {
  /// Build an unsaved person from validated fields.
  pub fn new(fields: ValidPerson) -> Self {
    Self {
      id:       None,
      name:     fields.name,
      birthday: fields.birthday,
      phone:    fields.phone,
      nin:      fields.nin,
    }
  }

  /// Overwrite all four data fields, keeping `id`.
  pub fn replace_fields(&mut self, fields: ValidPerson) {
    self.name = fields.name;
    self.birthday = fields.birthday;
    self.phone = fields.phone;
    self.nin = fields.nin;
  }

  /// Validate `payload` and replace this person's fields with it.
  ///
  /// Any `id` in the payload is ignored; identity never changes.
  pub fn apply(&mut self, payload: PersonPayload) -> Result<()> {
    let fields = payload.validate()?;
    self.replace_fields(fields);
    Ok(())
  }
}

// ─── PersonPayload ───────────────────────────────────────────────────────────

/// JSON body accepted by `POST /api/persons` and `PUT /api/persons/{id}`.
///
/// Fields are optional so that a missing `name` or `birthday` surfaces as a
/// validation violation instead of a deserialisation error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPayload {
  pub id:       Option<i64>,
  pub name:     Option<String>,
  pub birthday: Option<NaiveDate>,
  pub phone:    Option<String>,
  pub nin:      Option<String>,
}

impl PersonPayload {
  /// Turn a create request into an unsaved [`Person`].
  ///
  /// Rejects a client-supplied id before running the field rules.
  pub fn into_new(self) -> Result<Person> {
    if let Some(id) = self.id {
      return Err(Error::IdSupplied(id));
    }
    Ok(Person::new(self.validate()?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::validate::{Field, messages};

  fn payload() -> PersonPayload {
    PersonPayload {
      id:       None,
      name:     Some("Agent Smith".into()),
      birthday: NaiveDate::from_ymd_opt(1990, 5, 17),
      phone:    Some("1234567890".into()),
      nin:      Some("AB123456C".into()),
    }
  }

  #[test]
  fn into_new_builds_unsaved_person() {
    let person = payload().into_new().unwrap();
    assert_eq!(person.id, None);
    assert_eq!(person.name, "Agent Smith");
    assert_eq!(person.birthday, NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
    assert_eq!(person.phone.as_deref(), Some("1234567890"));
    assert_eq!(person.nin.as_deref(), Some("AB123456C"));
  }

  #[test]
  fn into_new_rejects_client_id() {
    let err = PersonPayload { id: Some(7), ..payload() }.into_new().unwrap_err();
    assert!(matches!(err, Error::IdSupplied(7)));
  }

  #[test]
  fn into_new_checks_id_before_fields() {
    let bad = PersonPayload { id: Some(1), name: None, ..Default::default() };
    assert!(matches!(bad.into_new(), Err(Error::IdSupplied(1))));
  }

  #[test]
  fn into_new_reports_violations() {
    let err = PersonPayload { birthday: None, ..payload() }.into_new().unwrap_err();
    let Error::Invalid(violations) = err else { panic!("expected violations") };
    assert_eq!(violations.as_slice().len(), 1);
    assert_eq!(violations.as_slice()[0].field, Field::Birthday);
    assert_eq!(violations.as_slice()[0].message, messages::BIRTHDAY_NULL);
  }

  #[test]
  fn apply_replaces_every_field_and_keeps_id() {
    let mut person = payload().into_new().unwrap();
    person.id = Some(3);

    person
      .apply(PersonPayload {
        id:       Some(99),
        name:     Some("Thomas Anderson".into()),
        birthday: NaiveDate::from_ymd_opt(1971, 9, 13),
        phone:    None,
        nin:      Some("XY987654Z".into()),
      })
      .unwrap();

    assert_eq!(person.id, Some(3));
    assert_eq!(person.name, "Thomas Anderson");
    assert_eq!(person.birthday, NaiveDate::from_ymd_opt(1971, 9, 13).unwrap());
    assert_eq!(person.phone, None);
    assert_eq!(person.nin.as_deref(), Some("XY987654Z"));
  }

  #[test]
  fn apply_leaves_person_untouched_on_violation() {
    let mut person = payload().into_new().unwrap();
    let before = person.clone();
    let result = person.apply(PersonPayload { phone: Some("123".into()), ..payload() });
    assert!(matches!(result, Err(Error::Invalid(_))));
    assert_eq!(person, before);
  }

  #[test]
  fn json_shape_has_all_keys() {
    let person = Person {
      id:       Some(1),
      name:     "Agent Smith".into(),
      birthday: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
      phone:    None,
      nin:      None,
    };
    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "id": 1,
        "name": "Agent Smith",
        "birthday": "1990-05-17",
        "phone": null,
        "nin": null,
      })
    );
  }

  #[test]
  fn payload_missing_keys_deserialise_as_none() {
    let p: PersonPayload =
      serde_json::from_str(r#"{"birthday":"2000-01-31"}"#).unwrap();
    assert_eq!(p.id, None);
    assert_eq!(p.name, None);
    assert_eq!(p.birthday, NaiveDate::from_ymd_opt(2000, 1, 31));
  }
}

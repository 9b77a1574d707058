//! Conversions between [`Person`] and the plain values stored in SQLite
//! columns.
//!
//! Birthdays are stored as `YYYY-MM-DD` text.

use chrono::NaiveDate;
use folk_core::person::Person;

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// Column list shared by every `SELECT` that builds a [`RawPerson`].
pub const PERSON_COLUMNS: &str = "id, name, birthday, phone, nin";

/// Raw values read directly from a `persons` row.
pub struct RawPerson {
  pub id:       i64,
  pub name:     String,
  pub birthday: String,
  pub phone:    Option<String>,
  pub nin:      Option<String>,
}

impl RawPerson {
  /// Row mapper for columns in [`PERSON_COLUMNS`] order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:       row.get(0)?,
      name:     row.get(1)?,
      birthday: row.get(2)?,
      phone:    row.get(3)?,
      nin:      row.get(4)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:       Some(self.id),
      name:     self.name,
      birthday: decode_date(&self.birthday)?,
      phone:    self.phone,
      nin:      self.nin,
    })
  }
}

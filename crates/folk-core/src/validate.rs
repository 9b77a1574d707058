//! Field-level validation rules for [`PersonPayload`].
//!
//! Every rule is evaluated independently; a payload reports all of its
//! violations at once, in field order (name, birthday, phone, nin).

use std::{fmt, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::person::PersonPayload;

/// Longest accepted name, counted in characters.
pub const NAME_MAX_CHARS: usize = 100;

static PHONE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("invalid phone pattern"));

static NIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Z]{2}[0-9]{6}[A-Z]$").expect("invalid NIN pattern")
});

/// Human-readable messages attached to each [`Violation`].
pub mod messages {
  pub const NAME_BLANK: &str = "Name cannot be empty or null";
  pub const NAME_TOO_LONG: &str = "Name cannot be longer than 100 characters";
  pub const BIRTHDAY_NULL: &str = "Birthday cannot be null";
  pub const PHONE_FORMAT: &str = "Phone must have 10 numbers";
  pub const NIN_FORMAT: &str = "NIN must have 2 letters + 6 numbers + 1 letter";
}

// ─── Violation ───────────────────────────────────────────────────────────────

/// The person field a [`Violation`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
  Name,
  Birthday,
  Phone,
  Nin,
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Name => "name",
      Self::Birthday => "birthday",
      Self::Phone => "phone",
      Self::Nin => "nin",
    })
  }
}

/// A single failed validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Violation {
  pub field:   Field,
  pub message: &'static str,
}

impl Violation {
  const fn new(field: Field, message: &'static str) -> Self {
    Self { field, message }
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.field, self.message)
  }
}

/// A non-empty list of violations returned by [`PersonPayload::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
#[error("validation failed: {}", join(.0))]
pub struct Violations(Vec<Violation>);

fn join(violations: &[Violation]) -> String {
  violations
    .iter()
    .map(Violation::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}

impl Violations {
  pub fn as_slice(&self) -> &[Violation] { &self.0 }

  pub fn iter(&self) -> impl Iterator<Item = &Violation> { self.0.iter() }
}

// ─── ValidPerson ─────────────────────────────────────────────────────────────

/// The four data fields of a payload that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPerson {
  pub name:     String,
  pub birthday: NaiveDate,
  pub phone:    Option<String>,
  pub nin:      Option<String>,
}

// ─── Rules ───────────────────────────────────────────────────────────────────

fn check_name(name: Option<&str>, out: &mut Vec<Violation>) {
  let Some(name) = name else {
    out.push(Violation::new(Field::Name, messages::NAME_BLANK));
    return;
  };
  if name.trim().is_empty() {
    out.push(Violation::new(Field::Name, messages::NAME_BLANK));
  }
  if name.chars().count() > NAME_MAX_CHARS {
    out.push(Violation::new(Field::Name, messages::NAME_TOO_LONG));
  }
}

fn check_birthday(birthday: Option<NaiveDate>, out: &mut Vec<Violation>) {
  if birthday.is_none() {
    out.push(Violation::new(Field::Birthday, messages::BIRTHDAY_NULL));
  }
}

fn check_pattern(
  value: Option<&str>,
  pattern: &Regex,
  violation: Violation,
  out: &mut Vec<Violation>,
) {
  // Absent is fine; an empty string is present and must match.
  if let Some(v) = value
    && !pattern.is_match(v)
  {
    out.push(violation);
  }
}

impl PersonPayload {
  /// Evaluate every rule and return the violations found (empty if valid).
  pub fn violations(&self) -> Vec<Violation> {
    let mut out = Vec::new();
    check_name(self.name.as_deref(), &mut out);
    check_birthday(self.birthday, &mut out);
    check_pattern(
      self.phone.as_deref(),
      &PHONE_PATTERN,
      Violation::new(Field::Phone, messages::PHONE_FORMAT),
      &mut out,
    );
    check_pattern(
      self.nin.as_deref(),
      &NIN_PATTERN,
      Violation::new(Field::Nin, messages::NIN_FORMAT),
      &mut out,
    );
    out
  }

  pub fn is_valid(&self) -> bool { self.violations().is_empty() }

  /// Consume the payload, returning its validated fields or every
  /// violation. The `id` field is not inspected here.
  pub fn validate(self) -> Result<ValidPerson, Violations> {
    let violations = self.violations();
    match (self.name, self.birthday) {
      (Some(name), Some(birthday)) if violations.is_empty() => Ok(ValidPerson {
        name,
        birthday,
        phone: self.phone,
        nin: self.nin,
      }),
      _ => Err(Violations(violations)),
    }
  }
}

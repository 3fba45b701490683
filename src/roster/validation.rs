//! # Field Validation
//!
//! Pure, field-keyed validators. Each one maps a raw string to an error
//! message or nothing; they never fail in the `Result` sense.
//!
//! | Field | Rule |
//! |-------|------|
//! | `name` | non-empty after trimming, at least 3 UTF-16 code units |
//! | `email` | `^[^\s@]+@[^\s@]+\.[^\s@]+$` |
//! | `phone` | exactly 10 ASCII digits |
//! | `country`, `state`, `city`, `town` | non-empty |
//! | `zip` | `12345` or `12345-6789`, ASCII digits only |
//!
//! `dob` and `age` carry no rule.

use crate::model::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
// `\d` would also match non-ASCII digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));
static ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("valid zip regex"));

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Dob,
    Age,
    Country,
    State,
    City,
    Zip,
    Town,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Dob,
        Field::Age,
        Field::Country,
        Field::State,
        Field::City,
        Field::Zip,
        Field::Town,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Dob => "dob",
            Field::Age => "age",
            Field::Country => "country",
            Field::State => "state",
            Field::City => "city",
            Field::Zip => "zip",
            Field::Town => "town",
        }
    }

    /// Reads this field's value out of a record as a string.
    pub fn value_of(&self, record: &Record) -> String {
        match self {
            Field::Name => record.name.clone(),
            Field::Phone => record.phone.clone(),
            Field::Email => record.email.clone(),
            Field::Dob => record.dob.clone(),
            Field::Age => record.age.to_string(),
            Field::Country => record.country.clone(),
            Field::State => record.state.clone(),
            Field::City => record.city.clone(),
            Field::Zip => record.zip.clone(),
            Field::Town => record.town.clone(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Validates one field's raw value. `None` means the value is acceptable.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    let error = match field {
        Field::Name => {
            if value.trim().is_empty() {
                "Name is required"
            } else if value.encode_utf16().count() < 3 {
                "Name must be at least 3 characters long"
            } else {
                return None;
            }
        }
        Field::Email if !EMAIL_RE.is_match(value) => "Invalid email format",
        Field::Phone if !PHONE_RE.is_match(value) => "Phone number must be 10 digits",
        Field::Country if value.is_empty() => "Country is required",
        Field::State if value.is_empty() => "State is required",
        Field::City if value.is_empty() => "City is required",
        Field::Zip if !ZIP_RE.is_match(value) => "Invalid ZIP code format",
        Field::Town if value.trim().is_empty() => "Town is required",
        _ => return None,
    };
    Some(error.to_string())
}

/// Per-field error messages for a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Records the outcome of re-validating `field`: sets or clears its error.
    pub fn set(&mut self, field: Field, error: Option<String>) {
        match error {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        f.write_str(&parts.join("; "))
    }
}

/// Runs every rule against a record draft.
pub fn validate_record(record: &Record) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.set(field, validate_field(field, &field.value_of(record)));
    }
    errors
}

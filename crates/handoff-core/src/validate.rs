//! Shared field validators used by every entity setter.
//!
//! Identifiers and timestamps arrive either already typed or in their textual
//! form (JSON bodies, form fields, database rows). [`IdInput`] and
//! [`DateInput`] capture that union once at the boundary; after
//! [`validate_uuid`] / [`validate_date_time`] everything is typed.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, SubsecRound, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Identifier ──────────────────────────────────────────────────────────────

/// Length of the hyphenated 8-4-4-4-12 form.
const CANONICAL_UUID_LEN: usize = 36;

/// An identifier as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum IdInput {
  Id(Uuid),
  Text(String),
  /// Raw `BINARY(16)` column value.
  Bytes(Vec<u8>),
  /// Any other JSON value; always rejected.
  Unsupported(Value),
}

impl From<Uuid> for IdInput {
  fn from(id: Uuid) -> Self { Self::Id(id) }
}

impl From<&str> for IdInput {
  fn from(s: &str) -> Self { Self::Text(s.to_owned()) }
}

impl From<String> for IdInput {
  fn from(s: String) -> Self { Self::Text(s) }
}

impl From<[u8; 16]> for IdInput {
  fn from(bytes: [u8; 16]) -> Self { Self::Bytes(bytes.to_vec()) }
}

impl<'de> Deserialize<'de> for IdInput {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
      Value::String(s) => Self::Text(s),
      other => Self::Unsupported(other),
    })
  }
}

/// Normalise an identifier to a typed [`Uuid`].
///
/// Text must be the canonical hyphenated form (either case); the braced,
/// URN and unhyphenated spellings that [`Uuid::parse_str`] tolerates are
/// rejected.
pub fn validate_uuid(field: &'static str, input: IdInput) -> Result<Uuid> {
  match input {
    IdInput::Id(id) => Ok(id),
    IdInput::Text(text) => {
      let text = text.trim();
      if text.len() != CANONICAL_UUID_LEN {
        return Err(Error::range(field, "not a valid uuid"));
      }
      Uuid::try_parse(text).map_err(|_| Error::range(field, "not a valid uuid"))
    }
    IdInput::Bytes(bytes) => Uuid::from_slice(&bytes)
      .map_err(|_| Error::range(field, "binary uuid must be exactly 16 bytes")),
    IdInput::Unsupported(value) => Err(Error::invalid(
      field,
      format!("expected a uuid or its string form, got {}", json_type(&value)),
    )),
  }
}

// ─── Date/time ───────────────────────────────────────────────────────────────

/// `YYYY-MM-DD HH:MM:SS` with up to six fractional digits.
static DATE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,6}))?$",
  )
  .expect("date/time pattern compiles")
});

/// Format used when rendering timestamps for `DATETIME(6)` columns and JSON.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A timestamp as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
  At(DateTime<Utc>),
  Text(String),
  Unsupported(Value),
}

impl From<DateTime<Utc>> for DateInput {
  fn from(at: DateTime<Utc>) -> Self { Self::At(at) }
}

impl From<&str> for DateInput {
  fn from(s: &str) -> Self { Self::Text(s.to_owned()) }
}

impl From<String> for DateInput {
  fn from(s: String) -> Self { Self::Text(s) }
}

impl<'de> Deserialize<'de> for DateInput {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
      Value::String(s) => Self::Text(s),
      other => Self::Unsupported(other),
    })
  }
}

/// Normalise a timestamp to a typed UTC [`DateTime`].
///
/// Typed values are truncated to microseconds, the precision of the
/// `DATETIME(6)` column and of [`DATE_TIME_FORMAT`].
///
/// A string that does not have the `YYYY-MM-DD HH:MM:SS[.ffffff]` shape is an
/// invalid argument; one that has the shape but names a day or time of day
/// that does not exist (`2017-02-30`, `25:00:00`) is out of range.
pub fn validate_date_time(
  field: &'static str,
  input: DateInput,
) -> Result<DateTime<Utc>> {
  let text = match input {
    DateInput::At(at) => return Ok(at.trunc_subsecs(6)),
    DateInput::Text(text) => text,
    DateInput::Unsupported(value) => {
      return Err(Error::invalid(
        field,
        format!(
          "expected a date/time or its string form, got {}",
          json_type(&value)
        ),
      ));
    }
  };

  let captures = DATE_TIME_PATTERN
    .captures(text.trim())
    .ok_or_else(|| Error::invalid(field, "not a valid date/time"))?;

  // Every group is all-ASCII-digits and at most four wide, so these parses
  // cannot overflow.
  let number = |i: usize| -> u32 {
    captures
      .get(i)
      .and_then(|m| m.as_str().parse().ok())
      .unwrap_or(0)
  };

  let date = NaiveDate::from_ymd_opt(number(1) as i32, number(2), number(3))
    .ok_or_else(|| Error::range(field, "not a Gregorian date"))?;

  let micros = captures
    .get(7)
    .map(|m| {
      let digits = format!("{:0<6}", m.as_str());
      digits.parse::<u32>().unwrap_or(0)
    })
    .unwrap_or(0);

  let time = NaiveTime::from_hms_micro_opt(number(4), number(5), number(6), micros)
    .ok_or_else(|| Error::range(field, "not a valid time of day"))?;

  Ok(date.and_time(time).and_utc())
}

/// Render a timestamp in [`DATE_TIME_FORMAT`].
pub fn format_date_time(at: &DateTime<Utc>) -> String {
  at.format(DATE_TIME_FORMAT).to_string()
}

// ─── Strings ─────────────────────────────────────────────────────────────────

/// Fixed-length hexadecimal token (activation token, hash, salt, and the
/// role/source/action names). Stored lowercase.
pub fn hex_token(field: &'static str, value: &str, len: usize) -> Result<String> {
  let token = value.trim().to_lowercase();
  if token.is_empty() || !token.chars().all(|c| c.is_ascii_hexdigit()) {
    return Err(Error::range(field, "value is not valid hexadecimal"));
  }
  if token.len() != len {
    return Err(Error::range(
      field,
      format!("value must be exactly {len} characters"),
    ));
  }
  Ok(token)
}

/// Required free text: trimmed, markup and control characters removed.
pub fn text(field: &'static str, value: &str, max: usize) -> Result<String> {
  bounded(field, strip_tags(value.trim()), max)?
    .ok_or_else(|| Error::invalid(field, "value is empty or insecure"))
}

/// Optional free text. Blank after sanitizing is treated as absent.
pub fn optional_text(
  field: &'static str,
  value: Option<&str>,
  max: usize,
) -> Result<Option<String>> {
  match value {
    Some(value) => bounded(field, strip_tags(value.trim()), max),
    None => Ok(None),
  }
}

/// Required email address, reduced to the characters an address may contain.
pub fn email(field: &'static str, value: &str, max: usize) -> Result<String> {
  bounded(field, strip_unsafe_email(value.trim()), max)?
    .ok_or_else(|| Error::invalid(field, "value is empty or insecure"))
}

pub fn optional_email(
  field: &'static str,
  value: Option<&str>,
  max: usize,
) -> Result<Option<String>> {
  match value {
    Some(value) => bounded(field, strip_unsafe_email(value.trim()), max),
    None => Ok(None),
  }
}

fn bounded(field: &'static str, value: String, max: usize) -> Result<Option<String>> {
  let value = value.trim();
  if value.is_empty() {
    return Ok(None);
  }
  if value.chars().count() > max {
    return Err(Error::range(
      field,
      format!("value is too large (max {max} characters)"),
    ));
  }
  Ok(Some(value.to_owned()))
}

/// Drop `<...>` markup (an unclosed tag runs to the end) and control chars.
/// A `<` followed by whitespace or the end of input is kept as text.
fn strip_tags(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  let mut in_tag = false;
  let mut chars = value.chars().peekable();
  while let Some(c) = chars.next() {
    match c {
      '<' if !in_tag => match chars.peek() {
        Some(next) if !next.is_whitespace() => in_tag = true,
        _ => out.push(c),
      },
      '>' if in_tag => in_tag = false,
      _ if in_tag || c.is_control() => {}
      _ => out.push(c),
    }
  }
  out
}

fn strip_unsafe_email(value: &str) -> String {
  const ALLOWED: &str = "!#$%&'*+-=?^_`{|}~@.[]";
  value
    .chars()
    .filter(|c| c.is_ascii_alphanumeric() || ALLOWED.contains(*c))
    .collect()
}

fn json_type(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

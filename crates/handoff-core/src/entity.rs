//! The behaviour every table-backed record shares.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{Error, Result, validate::format_date_time};

/// A validated record that maps onto one row of [`Entity::TABLE`].
///
/// The `Serialize` impl is the wire contract: identifiers render as
/// hyphenated strings and secret columns are skipped.
pub trait Entity: Serialize {
  /// Table name in [`crate::schema::SCHEMA`].
  const TABLE: &'static str;

  /// The primary key.
  fn primary_key(&self) -> Uuid;

  /// Project the record into the string-keyed map an API layer would emit.
  fn to_serializable(&self) -> Result<Map<String, Value>> {
    match serde_json::to_value(self)? {
      Value::Object(map) => Ok(map),
      other => Err(Error::Generic(format!(
        "{} serialized to a non-object value: {other}",
        Self::TABLE
      ))),
    }
  }
}

/// `serialize_with` adapter rendering timestamps as `DATETIME(6)` text.
pub(crate) fn serialize_timestamp<S: Serializer>(
  at: &DateTime<Utc>,
  serializer: S,
) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&format_date_time(at))
}

//! Error types for `handoff-core`.

use thiserror::Error;

/// The closed set of failure kinds a validator or setter can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// The input has the wrong shape or is empty/insecure after sanitizing.
  InvalidArgument,
  /// The input is well-typed but out of bounds (length, format, calendar).
  Range,
  /// Anything else.
  Generic,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("{field}: {message}")]
  InvalidArgument { field: &'static str, message: String },

  #[error("{field}: {message}")]
  Range { field: &'static str, message: String },

  #[error("{0}")]
  Generic(String),

  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
    Self::InvalidArgument {
      field,
      message: message.into(),
    }
  }

  pub(crate) fn range(field: &'static str, message: impl Into<String>) -> Self {
    Self::Range {
      field,
      message: message.into(),
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
      Self::Range { .. } => ErrorKind::Range,
      Self::Generic(_) | Self::Json(_) => ErrorKind::Generic,
    }
  }

  /// The field that rejected its value, when the failure came from a setter.
  pub fn field(&self) -> Option<&'static str> {
    match self {
      Self::InvalidArgument { field, .. } | Self::Range { field, .. } => {
        Some(field)
      }
      Self::Generic(_) | Self::Json(_) => None,
    }
  }

  /// The message as raised by the validator, without the field prefix.
  pub fn message(&self) -> String {
    match self {
      Self::InvalidArgument { message, .. } | Self::Range { message, .. } => {
        message.clone()
      }
      Self::Generic(message) => message.clone(),
      Self::Json(e) => e.to_string(),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kind_and_message_survive_display() {
    let err = Error::range("salesRoleName", "sales role name is not valid");
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.field(), Some("salesRoleName"));
    assert_eq!(err.message(), "sales role name is not valid");
    assert_eq!(err.to_string(), "salesRoleName: sales role name is not valid");
  }

  #[test]
  fn json_errors_are_generic() {
    let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
    let err = Error::from(json_err);
    assert_eq!(err.kind(), ErrorKind::Generic);
    assert_eq!(err.field(), None);
  }
}

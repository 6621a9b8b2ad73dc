//! Tagged success/failure container.
//!
//! An [`Outcome`] is either `Success { data }` or `Failure { error }`; a value
//! carrying both, or neither, cannot be built. On the wire it keeps the flat
//! object shape shared with non-Rust consumers:
//!
//! ```text
//! {"success": true,  "data": 42}
//! {"success": false, "error": "not found"}
//! ```

use serde::de::{self, IntoDeserializer};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Outcome of an operation that either produced a `T` or failed with a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    Success { data: T },
    Failure { error: String },
}

/// Builds a successful [`Outcome`] carrying `data`.
pub fn create_success_result<T>(data: T) -> Outcome<T> {
    Outcome::Success { data }
}

/// Builds a failed [`Outcome`] carrying `error`.
///
/// `T` only types the absent payload for the caller.
pub fn create_error_result<T>(error: impl Into<String>) -> Outcome<T> {
    Outcome::Failure {
        error: error.into(),
    }
}

impl<T> Outcome<T> {
    pub fn success(data: T) -> Self {
        create_success_result(data)
    }

    pub fn failure(error: impl Into<String>) -> Self {
        create_error_result(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success { data } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error } => Some(error),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success { data } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_error(self) -> Option<String> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error } => Some(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Success { data } => Outcome::Success { data },
            Outcome::Failure { error } => Outcome::Failure {
                error: error.clone(),
            },
        }
    }

    /// Transforms the success payload, leaving failures untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success { data } => Outcome::Success { data: f(data) },
            Outcome::Failure { error } => Outcome::Failure { error },
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success { data },
            Err(e) => Outcome::Failure {
                error: e.to_string(),
            },
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success { data } => Ok(data),
            Outcome::Failure { error } => Err(error),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Outcome::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Outcome::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// Flat shape as it appears on the wire. `null` and a missing key are
/// indistinguishable here.
#[derive(Deserialize)]
struct RawOutcome<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawOutcome::<T>::deserialize(deserializer)?;

        match (raw.success, raw.data, raw.error) {
            (true, _, Some(_)) => Err(de::Error::custom(
                "successful outcome must not carry an error",
            )),
            (false, Some(_), _) => Err(de::Error::custom(
                "failed outcome must not carry data",
            )),
            (false, None, None) => Err(de::Error::missing_field("error")),
            (false, None, Some(error)) => Ok(Outcome::Failure { error }),
            (true, Some(data), None) => Ok(Outcome::Success { data }),
            // Payloads such as `()` or `Option<_>` may legitimately be absent.
            (true, None, None) => {
                let absent: de::value::UnitDeserializer<D::Error> = ().into_deserializer();
                T::deserialize(absent)
                    .map(|data| Outcome::Success { data })
                    .map_err(|_| de::Error::missing_field("data"))
            }
        }
    }
}

//! The `Outcome` tagged union and its constructors.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the boolean field that tags a serialized outcome.
pub const DISCRIMINANT: &str = "ok";

/// Either a success or a failure, each with a caller-defined payload.
///
/// The variant is the discriminant, so an outcome can never claim success
/// while carrying a failure payload. `()` is the "no payload" payload.
///
/// On the wire an outcome is one flat map: the [`DISCRIMINANT`] field merged
/// with the payload's own fields.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use verdict::{make_ok, Outcome};
///
/// #[derive(Serialize)]
/// struct Count {
///     count: u32,
/// }
///
/// let outcome: Outcome<Count> = make_ok(Count { count: 3 });
/// let json = serde_json::to_string(&outcome).unwrap();
/// assert_eq!(json, r#"{"ok":true,"count":3}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T = (), E = ()> {
    /// Success, with its payload.
    Ok(T),

    /// Failure, with its payload.
    Err(E),
}

/// Builds a success outcome. Pass `()` for a bare discriminant.
pub fn make_ok<T, E>(payload: T) -> Outcome<T, E> {
    Outcome::Ok(payload)
}

/// Builds a failure outcome. Pass `()` for a bare discriminant.
pub fn make_err<T, E>(payload: E) -> Outcome<T, E> {
    Outcome::Err(payload)
}

/// Builds a success if `condition` holds, a failure otherwise.
///
/// The same payload is attached to whichever variant is produced, so its
/// shape has to make sense for both.
///
/// ```
/// use verdict::{make_when, Outcome};
///
/// assert_eq!(make_when(2 > 5, "too small"), Outcome::Err("too small"));
/// ```
pub fn make_when<P>(condition: bool, payload: P) -> Outcome<P, P> {
    if condition {
        make_ok(payload)
    } else {
        make_err(payload)
    }
}

impl<T, E> Outcome<T, E> {
    /// Builds `Ok(ok)` if `condition` holds, `Err(err)` otherwise.
    pub fn when(condition: bool, ok: T, err: E) -> Self {
        if condition {
            Outcome::Ok(ok)
        } else {
            Outcome::Err(err)
        }
    }

    /// Returns `true` if the outcome is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the outcome is `Err`.
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// The success payload, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(payload) => Some(payload),
            Outcome::Err(_) => None,
        }
    }

    /// The failure payload, if any.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(payload) => Some(payload),
        }
    }

    /// Borrows both payloads.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(payload) => Outcome::Ok(payload),
            Outcome::Err(payload) => Outcome::Err(payload),
        }
    }

    /// Maps the success payload, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(payload) => Outcome::Ok(f(payload)),
            Outcome::Err(payload) => Outcome::Err(payload),
        }
    }

    /// Maps the failure payload, leaving a success untouched.
    pub fn map_err<O, F>(self, f: F) -> Outcome<T, O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Outcome::Ok(payload) => Outcome::Ok(payload),
            Outcome::Err(payload) => Outcome::Err(f(payload)),
        }
    }

    /// Converts into a standard `Result` for use with `?`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Outcome::Ok(payload),
            Err(payload) => Outcome::Err(payload),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(payload) => Ok(payload),
            Outcome::Err(payload) => Err(payload),
        }
    }
}

#[derive(Serialize)]
struct Tagged<'a, P> {
    ok: bool,
    #[serde(flatten)]
    payload: &'a P,
}

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Outcome::Ok(payload) => Tagged { ok: true, payload }.serialize(serializer),
            Outcome::Err(payload) => Tagged { ok: false, payload }.serialize(serializer),
        }
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::deserialize(deserializer)?;
        let ok = match fields.remove(DISCRIMINANT) {
            Some(Value::Bool(ok)) => ok,
            Some(other) => {
                return Err(<D::Error as de::Error>::custom(format!(
                    "field `{DISCRIMINANT}` must be a boolean, found {other}"
                )));
            }
            None => return Err(<D::Error as de::Error>::missing_field(DISCRIMINANT)),
        };

        let outcome = if ok {
            payload_from(fields).map(Outcome::Ok)
        } else {
            payload_from(fields).map(Outcome::Err)
        };
        outcome.map_err(<D::Error as de::Error>::custom)
    }
}

/// Decodes the fields left after the discriminant; none left means unit.
fn payload_from<P>(fields: Map<String, Value>) -> serde_json::Result<P>
where
    P: DeserializeOwned,
{
    let empty = fields.is_empty();
    match serde_json::from_value(Value::Object(fields)) {
        Ok(payload) => Ok(payload),
        Err(_) if empty => serde_json::from_value(Value::Null),
        Err(err) => Err(err),
    }
}

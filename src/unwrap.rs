//! Response unwrapping policy.

use serde_json::Value;

/// Result of [`unwrap_response`].
#[derive(Debug, Clone, PartialEq)]
pub enum Unwrapped {
    /// The response was returned unchanged.
    Full(Value),
    /// The value found under the requested key.
    Sub(Value),
}

impl Unwrapped {
    pub fn into_inner(self) -> Value {
        match self {
            Unwrapped::Full(v) | Unwrapped::Sub(v) => v,
        }
    }

    pub fn is_sub(&self) -> bool {
        matches!(self, Unwrapped::Sub(_))
    }
}

/// Pull `key` out of `response` unless `raw` is set.
///
/// Falls back to the full response when no key is given, when `response` is
/// not an object, or when the key is absent or `null`. Never fails.
pub fn unwrap_response(response: Value, key: Option<&str>, raw: bool) -> Unwrapped {
    let Some(key) = key else {
        return Unwrapped::Full(response);
    };
    if raw {
        return Unwrapped::Full(response);
    }

    match response {
        Value::Object(mut map) => match map.remove(key) {
            Some(v) if !v.is_null() => Unwrapped::Sub(v),
            Some(v) => {
                map.insert(key.to_string(), v);
                tracing::trace!(key, "Unwrap key is null, returning full response");
                Unwrapped::Full(Value::Object(map))
            }
            None => {
                tracing::trace!(key, "Unwrap key missing, returning full response");
                Unwrapped::Full(Value::Object(map))
            }
        },
        other => Unwrapped::Full(other),
    }
}

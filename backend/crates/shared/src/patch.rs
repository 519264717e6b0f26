//! Tri-state Patch Field
//!
//! PATCH/PUT bodies here distinguish "field absent" (leave untouched) from
//! "field set to null" (clear) from "field set to a value". A plain
//! `Option<T>` collapses the first two, so update request types use
//! [`Patch<T>`] with `#[serde(default)]`:
//!
//! ```rust
//! use kernel::patch::Patch;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct UpdateBody {
//!     #[serde(default)]
//!     favorite_player_id: Patch<uuid::Uuid>,
//! }
//! ```

use serde::{Deserialize, Deserializer};

/// Explicit tri-state for a patchable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Field absent from the request: leave the stored value untouched
    #[default]
    Missing,
    /// Field explicitly null: clear the stored value
    Null,
    /// Field present: set the stored value
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// The value to persist, if the field was present at all.
    /// `Missing` → `None` (skip), `Null` → `Some(None)`, `Value(v)` → `Some(Some(v))`.
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            Patch::Missing => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Missing => Patch::Missing,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(v),
        }
    }

    /// Apply this patch on top of the current value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Missing => current,
            Patch::Null => None,
            Patch::Value(v) => Some(v),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the field is present; #[serde(default)] covers Missing.
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => Patch::Null,
            Some(v) => Patch::Value(v),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        name: Patch<String>,
    }

    #[test]
    fn test_absent_is_missing() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.name, Patch::Missing);
    }

    #[test]
    fn test_null_is_null() {
        let body: Body = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(body.name, Patch::Null);
    }

    #[test]
    fn test_value_is_value() {
        let body: Body = serde_json::from_str(r#"{"name": "ace"}"#).unwrap();
        assert_eq!(body.name, Patch::Value("ace".to_string()));
    }

    #[test]
    fn test_apply() {
        assert_eq!(Patch::<i32>::Missing.apply(Some(1)), Some(1));
        assert_eq!(Patch::<i32>::Null.apply(Some(1)), None);
        assert_eq!(Patch::Value(2).apply(Some(1)), Some(2));
    }

    #[test]
    fn test_into_update() {
        assert_eq!(Patch::<i32>::Missing.into_update(), None);
        assert_eq!(Patch::<i32>::Null.into_update(), Some(None));
        assert_eq!(Patch::Value(7).into_update(), Some(Some(7)));
    }
}

//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// ```
///
/// Serializes as the plain UUID string, so distinct ID types stay
/// interchangeable on the wire but not in the type system.
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

// Manual impls: derives would bound on T, which is only a marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_uuid(Uuid::parse_str(s)?))
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_uuid(Uuid::deserialize(deserializer)?))
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for RefreshToken IDs
    pub struct RefreshToken;

    /// Marker for Tournament IDs
    pub struct Tournament;

    /// Marker for Player IDs
    pub struct Player;

    /// Marker for Match IDs
    pub struct Match;

    /// Marker for Forum IDs
    pub struct Forum;

    /// Marker for Thread IDs
    pub struct Thread;

    /// Marker for Post IDs
    pub struct Post;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type RefreshTokenId = Id<markers::RefreshToken>;
pub type TournamentId = Id<markers::Tournament>;
pub type PlayerId = Id<markers::Player>;
pub type MatchId = Id<markers::Match>;
pub type ForumId = Id<markers::Forum>;
pub type ThreadId = Id<markers::Thread>;
pub type PostId = Id<markers::Post>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::new();
        let match_id: MatchId = Id::new();

        // These are different types, cannot be mixed
        let _u: Uuid = user_id.into_uuid();
        let _m: Uuid = match_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: PlayerId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_serde_roundtrip() {
        let id: MatchId = Id::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: MatchId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
        // Wire form is the bare UUID string
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn test_id_from_str() {
        let uuid = Uuid::new_v4();
        let id: ForumId = uuid.to_string().parse().unwrap();
        assert_eq!(id.as_uuid(), &uuid);
        assert!("garbage".parse::<ForumId>().is_err());
    }
}

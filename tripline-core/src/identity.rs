use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for an itinerary. Unique across the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItineraryId(Uuid);

impl ItineraryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItineraryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier assigned to a booking record when it is attached to an
/// itinerary. Unique within the parent sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ItineraryId::new();
        let b = ItineraryId::new();
        assert_ne!(a, b);

        let x = BookingId::new();
        let y = BookingId::new();
        assert_ne!(x, y);
    }

    #[test]
    fn test_id_serializes_transparent() {
        let id = BookingId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Plain UUID string, no wrapper object
        assert!(json.starts_with('"') && json.ends_with('"'));

        let back: BookingId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}

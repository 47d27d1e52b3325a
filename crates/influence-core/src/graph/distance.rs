use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shortest-path length between two nodes.
///
/// Hop count for unweighted graphs, edge-weight sum for weighted graphs.
/// [`Distance::INFINITE`] (the largest representable value) means the target
/// is unreachable and must be checked for before doing arithmetic.
///
/// Serializes as an integer, or `null` when infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Self = Self(0);
    pub const INFINITE: Self = Self(u64::MAX);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0 != u64::MAX
    }

    /// The finite value, or `None` when unreachable.
    #[must_use]
    pub const fn get(self) -> Option<u64> {
        if self.is_finite() { Some(self.0) } else { None }
    }

    /// Raw value including the sentinel.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Adds `step`, saturating at [`Distance::INFINITE`].
    #[must_use]
    pub const fn saturating_add(self, step: u64) -> Self {
        Self(self.0.saturating_add(step))
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITE
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(d) => write!(f, "{d}"),
            None => f.write_str("inf"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map_or(Self::INFINITE, Self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_is_not_finite() {
        assert!(!Distance::INFINITE.is_finite());
        assert_eq!(Distance::INFINITE.get(), None);
        assert_eq!(Distance::INFINITE.raw(), u64::MAX);
    }

    #[test]
    fn finite_values_round_through_get() {
        assert_eq!(Distance::new(7).get(), Some(7));
        assert_eq!(Distance::ZERO.get(), Some(0));
    }

    #[test]
    fn saturating_add_caps_at_infinite() {
        assert_eq!(Distance::new(u64::MAX - 1).saturating_add(5), Distance::INFINITE);
        assert_eq!(Distance::INFINITE.saturating_add(1), Distance::INFINITE);
        assert_eq!(Distance::new(2).saturating_add(3), Distance::new(5));
    }

    #[test]
    fn ordering_puts_infinite_last() {
        assert!(Distance::new(1_000_000) < Distance::INFINITE);
    }

    #[test]
    fn display_and_json() {
        assert_eq!(Distance::new(4).to_string(), "4");
        assert_eq!(Distance::INFINITE.to_string(), "inf");
        assert_eq!(serde_json::to_string(&Distance::new(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&Distance::INFINITE).unwrap(), "null");
        let back: Distance = serde_json::from_str("null").unwrap();
        assert_eq!(back, Distance::INFINITE);
    }
}

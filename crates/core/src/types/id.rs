//! Short random identifiers.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A short random identifier.
///
/// IDs are 9 lowercase base-36 characters drawn from a thread-local
/// pseudo-random generator. They are non-cryptographic and collision-prone;
/// do not rely on them for uniqueness guarantees.
///
/// ## Examples
///
/// ```
/// use recipe_roulette_core::ShortId;
///
/// let id = ShortId::generate();
/// assert_eq!(id.as_str().len(), 9);
/// assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(String);

impl ShortId {
    /// Number of characters in a generated ID.
    pub const LENGTH: usize = 9;

    /// Generate a new random ID.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id = (0..Self::LENGTH)
            .map(|_| {
                let digit = rng.random_range(0..36);
                char::from_digit(digit, 36).unwrap_or('0')
            })
            .collect();
        Self(id)
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ShortId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ShortId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<ShortId> for String {
    fn from(id: ShortId) -> Self {
        id.0
    }
}

//! Role and rating enums.

use serde::{Deserialize, Serialize};

/// Account role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Regular account.
    #[default]
    User,
    /// Administrative account.
    Admin,
}

impl UserRole {
    /// Lowercase label, e.g. for URLs or form values.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

/// How hard a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyRating {
    Easy,
    Medium,
    Hard,
}

impl DifficultyRating {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for DifficultyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for DifficultyRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" | "Easy" => Ok(Self::Easy),
            "medium" | "Medium" => Ok(Self::Medium),
            "hard" | "Hard" => Ok(Self::Hard),
            _ => Err(format!("invalid difficulty rating: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_serde() {
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"USER\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"ADMIN\""
        );

        let role: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_user_role_label() {
        assert_eq!(UserRole::User.label(), "user");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_role_from_str() {
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert!("superuser".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_difficulty_serde() {
        assert_eq!(
            serde_json::to_string(&DifficultyRating::Easy).unwrap(),
            "\"EASY\""
        );

        let rating: DifficultyRating = serde_json::from_str("\"HARD\"").unwrap();
        assert_eq!(rating, DifficultyRating::Hard);
    }

    #[test]
    fn test_difficulty_label() {
        assert_eq!(DifficultyRating::Easy.label(), "Easy");
        assert_eq!(DifficultyRating::Medium.label(), "Medium");
        assert_eq!(DifficultyRating::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(
            "medium".parse::<DifficultyRating>().unwrap(),
            DifficultyRating::Medium
        );
        assert!("impossible".parse::<DifficultyRating>().is_err());
    }
}

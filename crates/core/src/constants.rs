//! Application-wide constants.

/// Display name of the application.
pub const APP_NAME: &str = "Recipe Roulette";

/// One-sentence description, used for page metadata.
pub const APP_DESCRIPTION: &str =
    "A gamified cooking application that helps users discover recipes based on available ingredients";

/// Cuisine display names offered by the roulette wheel.
pub const CUISINE_TYPES: [&str; 10] = [
    "Italian",
    "Mexican",
    "Asian",
    "American",
    "French",
    "Mediterranean",
    "Indian",
    "Chinese",
    "Japanese",
    "Thai",
];

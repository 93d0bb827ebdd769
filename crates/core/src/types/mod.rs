//! Core types for Recipe Roulette.
//!
//! This module provides type-safe wrappers and placeholder domain records.

pub mod email;
pub mod id;
pub mod ingredient;
pub mod role;
pub mod user;

pub use email::{Email, EmailError};
pub use id::ShortId;
pub use ingredient::Ingredient;
pub use role::{DifficultyRating, UserRole};
pub use user::User;

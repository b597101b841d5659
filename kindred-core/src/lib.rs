//! Core domain types for the kindred engine.
//!
//! These models provide basic validation to keep downstream
//! components honest. Constructors return `Result` to surface
//! invalid input early.

#![forbid(unsafe_code)]

mod genre;
mod item;
mod matrix;
mod rating;

pub use genre::{Genre, GenreError};
pub use item::{Item, ItemError};
pub use matrix::UserItemMatrix;
pub use rating::{Rating, RatingError};

/// Identifier of a user in the ratings dataset. Valid ids start at 1.
pub type UserId = u32;

/// Identifier of an item in the ratings dataset. Valid ids start at 1.
pub type ItemId = u32;

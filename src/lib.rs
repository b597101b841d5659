//! Facade crate for the kindred recommendation engine.
//!
//! This crate re-exports the core domain types and the
//! collaborative-filtering pipeline so downstream callers can depend on a
//! single crate.

#![forbid(unsafe_code)]

pub use kindred_core::{
    Genre, GenreError, Item, ItemError, ItemId, Rating, RatingError, UserId, UserItemMatrix,
};

pub use kindred_scorer::{
    Contribution, DEFAULT_EXPLANATIONS, DEFAULT_K_NEIGHBORS, DEFAULT_TOP_N, Neighbor,
    RecommendError, Recommendation, cosine_on_overlap, explain_item, rank_scores, recommend,
    score_items, top_k_neighbors,
};

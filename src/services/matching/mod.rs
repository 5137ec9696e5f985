//! Wishlist matching: normalization, similarity metrics and sphere search.

pub mod item_matcher;
pub mod normalizer;
pub mod similarity;

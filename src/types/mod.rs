pub mod errors;
pub mod spoiler;

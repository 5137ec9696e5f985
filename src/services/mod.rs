pub mod archipelago;
pub mod config;
pub mod matching;
pub mod progression;
pub mod report;
pub mod spoiler;

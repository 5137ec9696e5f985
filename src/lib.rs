pub mod app;
pub mod services;
pub mod types;

pub use app::{analyze, analyze_document, render, run, Analysis};

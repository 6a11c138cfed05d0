//! Synthetic movie/webseries catalog generator and a TF-IDF content-based
//! recommender over it.

pub mod app;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

//! Jellygrid - browse a Jellyfin library as a grid of movies, series and collections
//!
//! This library crate exposes the core functionality for integration testing.

pub mod catalog;
pub mod client;
pub mod config;
pub mod favorites;
pub mod render;

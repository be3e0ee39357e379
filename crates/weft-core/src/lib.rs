//! Weft Core Library
//!
//! Core domain logic for the weft page store: labeled markdown pages in
//! spaces, and related-page discovery over shared labels.

pub mod config;
pub mod error;
pub mod format;
pub mod id;
pub mod index;
pub mod label;
pub mod logging;
pub mod page;
pub mod records;
pub mod related;
pub mod render;
pub mod store;

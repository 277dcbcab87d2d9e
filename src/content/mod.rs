//! Content Module
//!
//! In-memory content store behind the demo API routes.

mod repository;

pub use repository::ContentRepository;

//! Request and Response models for the content API
//!
//! This module defines the records served by the demo routes and the DTOs
//! used for serializing/deserializing HTTP request and response bodies.

pub mod records;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use records::{ContentBlock, SkillNode, TrainingDrill, UserProfile};
pub use requests::{
    CreateContentBlockRequest, CreateSkillNodeRequest, InvalidateRequest, NodeQuery,
    UpdateContentBlockRequest,
};
pub use responses::{HealthResponse, InvalidationResponse, StatsResponse};

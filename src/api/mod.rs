//! API Module
//!
//! HTTP handlers and routing for the content API fronted by the response cache.
//!
//! # Endpoints
//! - `GET|POST /api/content-blocks`, `GET|PUT|DELETE /api/content-blocks/:id`
//! - `GET /api/content-sections/:section`
//! - `GET|POST /api/skill-tree/nodes`, `GET /api/skill-tree/nodes/:id/children`
//! - `GET /api/skill-tree/levels/:level`
//! - `GET /api/training-drills`
//! - `GET /api/user/profile`
//! - `GET /api/admin/cache/stats`, `POST /api/admin/cache/clear`,
//!   `POST /api/admin/cache/invalidate`
//! - `GET /health`

pub mod admin;
pub mod content;
pub mod routes;
pub mod skill_tree;
pub mod state;

pub use routes::create_router;
pub use state::AppState;

//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::TriviaAppState;
pub use router::{catalog_router, picks_router, rankings_router};

//! REST API module for the timeclock service
//!
//! HTTP endpoints for the punch clock, workday records, timesheets and
//! user administration, plus the OpenAPI document served by Swagger UI.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use router::create_api_router;

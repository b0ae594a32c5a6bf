//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They provide type-safe representations with business logic separated from database
//! and API concerns.

pub mod category;
pub mod channel;
pub mod join_request;
pub mod membership;
pub mod message;
pub mod recommendation;
pub mod top_list;
pub mod user;

/// Number of pages needed to show `total` items at `per_page` items per page.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        (total as f64 / per_page as f64).ceil() as u64
    } else {
        0
    }
}

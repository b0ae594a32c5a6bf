//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert request DTOs into service
//! params, call the service layer, and convert the returned domain models back into
//! DTOs. Each handler carries its OpenAPI description via `#[utoipa::path]`.

pub mod admin;
pub mod auth;
pub mod category;
pub mod channel;
pub mod join_request;
pub mod membership;
pub mod message;
pub mod recommendation;
pub mod top_list;
pub mod user;

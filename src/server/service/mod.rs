//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data repositories. They validate
//! input, enforce the membership and ownership rules and coordinate several
//! repositories where an operation spans tables. They work with domain models and
//! return `AppError`.

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

#[cfg(test)]
mod test;

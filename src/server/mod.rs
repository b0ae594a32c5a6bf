//! recroom backend.
//!
//! Everything behind `/api` lives here: accounts and sessions, channels grouped
//! into categories, channel membership and join requests, messages with file
//! uploads, Spotify/TMDb recommendations and the per-user Top 5 lists.
//!
//! # Layout
//!
//! - `controller/` - axum handlers; each checks permissions with `AuthGuard` and maps DTOs
//! - `service/` - rules such as "the last channel admin can't leave" or "top lists hold five entries"
//! - `data/` - SeaORM repositories returning domain models
//! - `model/` - domain models and the params passed from controllers to services
//! - `error/` - `AppError` and its mapping to status codes
//! - `middleware/` - session access and the permission guard
//! - `util/` - input validation and the upload directory
//!
//! `config`, `state`, `startup` and `router` wire these together in `main`.
//!
//! Handlers never touch the database directly. A request is authorized in the
//! controller, checked against channel and user rules in the service, and persisted
//! by a repository; the service hands a domain model back which the controller
//! turns into its DTO.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

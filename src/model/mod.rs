//! Data transfer objects exchanged with API clients.
//!
//! Everything here is plain serde data with an OpenAPI schema. Conversions from the
//! server's domain models live next to those models in `server::model`.

pub mod api;
pub mod auth;
pub mod category;
pub mod channel;
pub mod join_request;
pub mod message;
pub mod recommendation;
pub mod top_list;
pub mod user;

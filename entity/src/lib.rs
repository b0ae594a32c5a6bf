//! SeaORM entities for every table in the recroom schema.

pub mod prelude;

pub mod bind_channel_category;
pub mod bind_request_channel_user;
pub mod category;
pub mod channel;
pub mod channel_user;
pub mod message;
pub mod recommendation;
pub mod request;
pub mod top_song;
pub mod top_tmdb;
pub mod user;

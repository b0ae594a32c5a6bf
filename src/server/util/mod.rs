//! Shared helpers used across services.

pub mod storage;
pub mod validate;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Page selection shared by every paginated listing.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// Page size used when a listing request doesn't name one.
pub fn default_entries() -> u64 {
    10
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Window over a list result, rendered as `LIMIT count OFFSET offset`.
///
/// Values are passed through as-is; negative or zero values are left for the
/// database to interpret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub offset: i64,
    pub count: i64,
}

impl Pagination {
    pub fn new(offset: i64, count: i64) -> Self {
        Self { offset, count }
    }

    /// First row only, used for single-item lookups
    pub fn first() -> Self {
        Self::new(0, 1)
    }
}

use serde::{Deserialize, Serialize};

/// One parent linked to any number of children in a join table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub parent_id: i64,
    pub child_ids: Vec<i64>,
}

impl Association {
    pub fn new(parent_id: i64, child_ids: Vec<i64>) -> Self {
        Self {
            parent_id,
            child_ids,
        }
    }

    /// Number of join rows this association expands to
    pub fn row_count(&self) -> usize {
        self.child_ids.len()
    }
}

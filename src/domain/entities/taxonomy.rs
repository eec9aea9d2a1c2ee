use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A topic or a tag. Both taxonomies share the `(id, name)` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyItem {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyDraft {
    name: String,
}

impl TaxonomyDraft {
    pub fn new(name: String) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyUpdate {
    id: i64,
    name: String,
}

impl TaxonomyUpdate {
    pub fn new(id: i64, name: String) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::InvalidId(id));
        }
        let draft = TaxonomyDraft::new(name)?;
        Ok(Self {
            id,
            name: draft.name,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

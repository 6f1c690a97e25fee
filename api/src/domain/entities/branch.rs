//! Branch domain entity
//!
//! A physical office originating loan applications.

use super::Record;

/// Unique identifier for a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BranchId(pub i32);

impl From<i32> for BranchId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<BranchId> for i32 {
    fn from(id: BranchId) -> Self {
        id.0
    }
}

impl std::fmt::Display for BranchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub id: BranchId,
    pub city: Option<String>,
    pub address: Option<String>,
}

impl Record for Branch {
    type Id = BranchId;

    fn id(&self) -> BranchId {
        self.id
    }

    fn not_found_message(id: BranchId) -> String {
        format!("Agence {} non trouvée", id)
    }
}

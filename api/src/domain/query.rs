//! Query descriptions
//!
//! Backend-agnostic descriptions of pagination and filtering. Store
//! adapters translate these into their own query language.

use super::entities::{BranchId, ClientId};
use crate::error::DomainError;

/// Page size used when the caller does not pick one
pub const DEFAULT_LIMIT: u64 = 100;

/// Largest page a caller may request
pub const MAX_LIMIT: u64 = 1000;

/// Offset pagination over a primary-key ordered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

impl Page {
    /// Validate raw caller input.
    ///
    /// Out-of-range values are rejected rather than clamped.
    pub fn new(skip: i64, limit: i64) -> Result<Self, DomainError> {
        let skip = u64::try_from(skip).map_err(|_| {
            DomainError::Validation(format!("skip must be >= 0, got {}", skip))
        })?;
        let limit = u64::try_from(limit)
            .ok()
            .filter(|l| *l <= MAX_LIMIT)
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "limit must be between 0 and {}, got {}",
                    MAX_LIMIT, limit
                ))
            })?;

        Ok(Self { skip, limit })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Filters accepted by the loan application listing.
///
/// Provided filters combine with AND; `None` adds no constraint. Every
/// field matches by equality except `approval_flag`, which is a
/// case-insensitive substring match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanApplicationFilter {
    pub operation_amount: Option<i32>,
    pub duration: Option<i32>,
    pub client_id: Option<ClientId>,
    pub approval_flag: Option<String>,
    pub branch_id: Option<BranchId>,
    pub processing_duration: Option<i32>,
    pub approval_code: Option<i32>,
}

impl LoanApplicationFilter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

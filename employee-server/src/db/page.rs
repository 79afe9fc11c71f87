//! Pagination parameters

use crate::error::{ServiceError, ServiceResult};

/// A 1-indexed page of `limit` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub limit: u32,
}

impl Page {
    /// Parse raw path segments; both must be positive decimal integers
    pub fn parse(page: &str, limit: &str) -> ServiceResult<Self> {
        let number = page.trim().parse::<u32>().ok().filter(|n| *n >= 1);
        let limit_value = limit.trim().parse::<u32>().ok().filter(|n| *n >= 1);
        match (number, limit_value) {
            (Some(number), Some(limit)) => Ok(Self { number, limit }),
            _ => Err(ServiceError::validation(format!(
                "invalid page/limit: {page}/{limit}"
            ))),
        }
    }

    /// Rows skipped before this page: `(page - 1) * limit`
    pub fn offset(&self) -> i64 {
        (i64::from(self.number) - 1).saturating_mul(i64::from(self.limit))
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

//! Page sizing for [`crate::Client::query_paged`].

use crate::{query::EventQuery, types::CountResponse, Error};

/// Page size and record target for one paged query, derived from the
/// caller's query and a count probe. The caller's query is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagePlan {
    /// `limit` sent with every page.
    pub page_size: u32,
    /// Number of records to fetch in total.
    pub total: u32,
}

impl PagePlan {
    /// The page size is the query's `limit` when set, else the service's
    /// `maxAllowed`. The total is `total_results` capped at the probed count,
    /// or the probed count when `total_results` is unset.
    pub fn resolve(query: &EventQuery, probe: &CountResponse) -> Result<Self, Error> {
        let page_size = query
            .limit
            .filter(|limit| *limit != 0)
            .unwrap_or(probe.max_allowed);
        let total = match query.total_results.filter(|total| *total != 0) {
            Some(target) => target.min(probe.count),
            None => probe.count,
        };
        if page_size == 0 && total > 0 {
            return Err(Error::InvalidPageSize);
        }
        Ok(Self { page_size, total })
    }

    /// 1-based offsets of each page, in request order.
    pub fn offsets(&self) -> impl Iterator<Item = u32> {
        (1..=self.total).step_by(self.page_size.max(1) as usize)
    }
}

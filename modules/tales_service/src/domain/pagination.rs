//! "View More" pagination: the requested row count grows by one page at a time

/// Limit arithmetic for one browse view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page_size: usize,
    pub max_limit: usize,
}

impl Pager {
    pub fn new(page_size: usize, max_limit: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            max_limit: max_limit.max(page_size),
        }
    }

    /// Effective limit for a requested one; missing or zero means one page
    pub fn normalize(&self, requested: Option<usize>) -> usize {
        match requested {
            None | Some(0) => self.page_size,
            Some(n) => n.min(self.max_limit),
        }
    }

    /// Limit after one more "View More" step; never below `limit`
    pub fn load_more(&self, limit: usize) -> usize {
        limit
            .saturating_add(self.page_size)
            .min(self.max_limit)
            .max(limit)
    }

    /// A full page came back, the hosted path is active and the cap is not reached
    pub fn has_more(&self, len: usize, limit: usize, offline: bool) -> bool {
        !offline && len >= limit && limit < self.max_limit
    }
}

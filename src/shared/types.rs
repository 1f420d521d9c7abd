use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Canonical failure body for every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page query parameter for the question listing endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// A LIMIT/OFFSET pair over the ascending-id question ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageQuery {
    /// Window for this page, fixed at ten items. Pages below 1 have no
    /// window at all; the caller turns that into an empty result.
    pub fn window(&self) -> Option<PageWindow> {
        if self.page < 1 {
            return None;
        }
        Some(PageWindow {
            limit: QUESTIONS_PER_PAGE,
            offset: (self.page - 1) * QUESTIONS_PER_PAGE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of items the window selects from an ordered set of `total`.
    fn window_len(page: i64, total: i64) -> i64 {
        match (PageQuery { page }).window() {
            Some(w) => (total - w.offset).clamp(0, w.limit),
            None => 0,
        }
    }

    #[test]
    fn first_page_starts_at_zero() {
        let window = PageQuery { page: 1 }.window().unwrap();
        assert_eq!(
            window,
            PageWindow {
                limit: 10,
                offset: 0
            }
        );
    }

    #[test]
    fn each_page_advances_by_the_window_size() {
        let window = PageQuery { page: 3 }.window().unwrap();
        assert_eq!(
            window,
            PageWindow {
                limit: 10,
                offset: 20
            }
        );
    }

    #[test]
    fn pages_below_one_have_no_window() {
        assert!(PageQuery { page: 0 }.window().is_none());
        assert!(PageQuery { page: -7 }.window().is_none());
    }

    #[test]
    fn window_len_matches_the_slice_contract() {
        // len(page, N) == min(10, max(0, N - 10*(page-1)))
        for total in [0i64, 1, 9, 10, 11, 12, 25, 30] {
            for page in 1..=5i64 {
                let expected = (total - 10 * (page - 1)).clamp(0, 10);
                assert_eq!(window_len(page, total), expected, "page={page} total={total}");
            }
        }
    }

    #[test]
    fn twelve_questions_split_into_ten_and_two() {
        assert_eq!(window_len(1, 12), 10);
        assert_eq!(window_len(2, 12), 2);
        assert_eq!(window_len(3, 12), 0);
    }
}

//! Derived list views over repository output. These are the pure functions
//! behind the landing page, the full public listing, and the administrator
//! dashboard.

use serde::{Deserialize, Serialize};

use super::domain::{ReportStatus, ScamReport};

/// Number of reports shown on the landing page.
pub const LANDING_PAGE_LIMIT: usize = 5;

/// Fixed page size of the full public listing.
pub const PUBLIC_PAGE_SIZE: usize = 25;

/// Status filter offered on the administrator dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub const fn matches(self, status: ReportStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => matches!(status, ReportStatus::Pending),
            StatusFilter::Approved => matches!(status, ReportStatus::Approved),
            StatusFilter::Rejected => matches!(status, ReportStatus::Rejected),
        }
    }
}

/// Public listing: approved reports only, newest first, optionally
/// narrowed by a case-insensitive substring match on the company name.
/// Idempotent over already-filtered input.
pub fn public_listing(reports: &[ScamReport], search: &str) -> Vec<ScamReport> {
    let mut listing: Vec<ScamReport> = reports
        .iter()
        .filter(|report| report.status.is_public())
        .filter(|report| report.company_name_matches(search))
        .cloned()
        .collect();
    listing.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listing
}

/// The first [`LANDING_PAGE_LIMIT`] entries of the public listing.
pub fn landing_page(reports: &[ScamReport], search: &str) -> Vec<ScamReport> {
    let mut listing = public_listing(reports, search);
    listing.truncate(LANDING_PAGE_LIMIT);
    listing
}

/// Administrator listing: every status unless narrowed, newest first.
pub fn admin_listing(reports: &[ScamReport], filter: StatusFilter) -> Vec<ScamReport> {
    let mut listing: Vec<ScamReport> = reports
        .iter()
        .filter(|report| filter.matches(report.status))
        .cloned()
        .collect();
    listing.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listing
}

/// One page of a listing plus the bookkeeping the pager renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slice one 1-based page out of an ordered listing. Page sizes below 1
/// are clamped to 1; a page past the end yields an empty item list.
/// Concatenating all pages in order reproduces the input exactly.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = (start + page_size).min(total_items);
    let slice = &items[start..end];

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
    }
}

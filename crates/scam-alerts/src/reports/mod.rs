//! Scam report intake, moderation, and the derived list views.

pub mod domain;
pub mod moderation;
pub mod repository;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{ProofAttachment, ReportId, ReportStatus, ScamCompanyDetails, ScamReport};
pub use moderation::{authorize_moderator, available_actions, ModerationError};
pub use repository::ReportRepository;
pub use router::{report_router, ReportRouterState};
pub use service::{ReportService, ReportServiceError, ReportSubmission};
pub use views::{
    admin_listing, landing_page, paginate, public_listing, Page, StatusFilter,
    LANDING_PAGE_LIMIT, PUBLIC_PAGE_SIZE,
};

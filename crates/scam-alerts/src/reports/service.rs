use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::identity::{UserId, UserRepository};
use crate::latency::SimulatedLatency;
use crate::storage::RepositoryError;

use super::domain::{ProofAttachment, ReportId, ReportStatus, ScamCompanyDetails, ScamReport};
use super::repository::ReportRepository;

/// Everything a submitter provides when reporting a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubmission {
    pub company_details: ScamCompanyDetails,
    pub scam_description: String,
    #[serde(default)]
    pub proof_images: Vec<ProofAttachment>,
    pub submitted_by: UserId,
}

/// Service composing the report repository and the identity store it
/// validates submitters against.
pub struct ReportService<R, U> {
    reports: Arc<R>,
    users: Arc<U>,
    latency: SimulatedLatency,
}

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("report-{id:06}"))
}

impl<R, U> ReportService<R, U>
where
    R: ReportRepository + 'static,
    U: UserRepository + 'static,
{
    pub fn new(reports: Arc<R>, users: Arc<U>, latency: SimulatedLatency) -> Self {
        Self {
            reports,
            users,
            latency,
        }
    }

    /// Every report regardless of status, unordered. The views module
    /// sorts and filters per page.
    pub async fn list(&self) -> Result<Vec<ScamReport>, ReportServiceError> {
        self.latency.wait().await;
        Ok(self.reports.list()?)
    }

    /// Validate the submitter, convert each proof attachment into its
    /// storable reference, and store a new PENDING report with
    /// `created_at == updated_at`.
    pub async fn submit(
        &self,
        submission: ReportSubmission,
    ) -> Result<ScamReport, ReportServiceError> {
        self.latency.extended().wait().await;

        let submitter = self
            .users
            .find_by_id(&submission.submitted_by)?
            .ok_or_else(|| ReportServiceError::UnknownSubmitter(submission.submitted_by.clone()))?;

        let proof_images = submission
            .proof_images
            .iter()
            .map(ProofAttachment::storage_reference)
            .collect();

        let now = Utc::now();
        let report = ScamReport {
            id: next_report_id(),
            company_details: submission.company_details,
            scam_description: submission.scam_description,
            proof_images,
            submitted_by: submitter.submitter_profile(),
            status: ReportStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let stored = self.reports.insert(report)?;
        Ok(stored)
    }

    /// Set the status to any of the three values and refresh `updated_at`.
    /// No transition-adjacency guard: any state, including the current
    /// one, is accepted from any state.
    pub async fn update_status(
        &self,
        id: &ReportId,
        status: ReportStatus,
    ) -> Result<ScamReport, ReportServiceError> {
        self.latency.wait().await;

        let mut report = self
            .reports
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        report.status = status;
        report.updated_at = Utc::now();
        self.reports.update(report.clone())?;
        Ok(report)
    }

    /// Permanent removal. No soft-delete, no audit trail.
    pub async fn delete(&self, id: &ReportId) -> Result<(), ReportServiceError> {
        self.latency.wait().await;
        Ok(self.reports.delete(id)?)
    }
}

/// Error raised by the report service.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error("no registered user with id {0}")]
    UnknownSubmitter(UserId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

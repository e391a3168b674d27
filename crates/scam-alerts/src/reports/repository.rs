use crate::storage::RepositoryError;

use super::domain::{ReportId, ScamReport};

/// Storage abstraction over the report collection so the service and the
/// list views can be exercised in isolation, and so a persistent store can
/// replace the in-memory one without touching callers.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, report: ScamReport) -> Result<ScamReport, RepositoryError>;
    fn update(&self, report: ScamReport) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReportId) -> Result<Option<ScamReport>, RepositoryError>;
    fn delete(&self, id: &ReportId) -> Result<(), RepositoryError>;
    /// Defensive copy of every report, any status, in no particular order.
    /// Consumers sort by recency themselves.
    fn list(&self) -> Result<Vec<ScamReport>, RepositoryError>;
}

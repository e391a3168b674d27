use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::identity::{IdentityService, Role, SessionStore, SubmitterProfile, User, UserId, UserRepository};
use crate::latency::SimulatedLatency;
use crate::reports::domain::{ProofAttachment, ReportId, ReportStatus, ScamCompanyDetails, ScamReport};
use crate::reports::repository::ReportRepository;
use crate::reports::router::ReportRouterState;
use crate::reports::service::{ReportService, ReportSubmission};
use crate::storage::RepositoryError;

#[derive(Default, Clone)]
pub(super) struct MemoryReports {
    records: Arc<Mutex<HashMap<ReportId, ScamReport>>>,
}

impl MemoryReports {
    pub(super) fn with_seed(reports: Vec<ScamReport>) -> Self {
        let repo = Self::default();
        {
            let mut guard = repo.records.lock().expect("report mutex poisoned");
            for report in reports {
                guard.insert(report.id.clone(), report);
            }
        }
        repo
    }

    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("report mutex poisoned").len()
    }
}

impl ReportRepository for MemoryReports {
    fn insert(&self, report: ScamReport) -> Result<ScamReport, RepositoryError> {
        let mut guard = self.records.lock().expect("report mutex poisoned");
        if guard.contains_key(&report.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(report.id.clone(), report.clone());
        Ok(report)
    }

    fn update(&self, report: ScamReport) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("report mutex poisoned");
        if guard.contains_key(&report.id) {
            guard.insert(report.id.clone(), report);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<ScamReport>, RepositoryError> {
        let guard = self.records.lock().expect("report mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &ReportId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("report mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<ScamReport>, RepositoryError> {
        let guard = self.records.lock().expect("report mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryUsers {
    records: Arc<Mutex<HashMap<UserId, User>>>,
}

impl MemoryUsers {
    pub(super) fn with_seed(users: Vec<User>) -> Self {
        let repo = Self::default();
        {
            let mut guard = repo.records.lock().expect("user mutex poisoned");
            for user in users {
                guard.insert(user.id.clone(), user);
            }
        }
        repo
    }
}

impl UserRepository for MemoryUsers {
    fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let mut guard = self.records.lock().expect("user mutex poisoned");
        if guard.values().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let guard = self.records.lock().expect("user mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let guard = self.records.lock().expect("user mutex poisoned");
        Ok(guard.values().find(|user| user.email == email).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemorySessions {
    token: Arc<Mutex<Option<String>>>,
}

impl SessionStore for MemorySessions {
    fn persist(&self, token: &str) {
        *self.token.lock().expect("session mutex poisoned") = Some(token.to_string());
    }

    fn load(&self) -> Option<String> {
        self.token.lock().expect("session mutex poisoned").clone()
    }

    fn clear(&self) {
        *self.token.lock().expect("session mutex poisoned") = None;
    }
}

pub(super) fn reporter() -> User {
    User {
        id: UserId("user-1".to_string()),
        full_name: "John Doe".to_string(),
        email: "user@example.com".to_string(),
        role: Role::User,
    }
}

pub(super) fn admin() -> User {
    User {
        id: UserId("admin-1".to_string()),
        full_name: "Admin".to_string(),
        email: "admin@example.com".to_string(),
        role: Role::Admin,
    }
}

pub(super) fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn report(id: &str, company: &str, status: ReportStatus, created: DateTime<Utc>) -> ScamReport {
    ScamReport {
        id: ReportId(id.to_string()),
        company_details: ScamCompanyDetails {
            name: company.to_string(),
            ..ScamCompanyDetails::default()
        },
        scam_description: format!("{company} took the money and vanished."),
        proof_images: Vec::new(),
        submitted_by: SubmitterProfile {
            id: UserId("user-1".to_string()),
            full_name: "John Doe".to_string(),
            email: "user@example.com".to_string(),
        },
        status,
        created_at: created,
        updated_at: created,
    }
}

/// Three reports mirroring the seed data: one per status, the approved one
/// oldest of the approved set.
pub(super) fn seed_reports() -> Vec<ScamReport> {
    vec![
        report(
            "report-1",
            "Quick Rich Inc.",
            ReportStatus::Approved,
            at(2023, 10, 26, 10),
        ),
        report(
            "report-2",
            "Easy Money Ltd.",
            ReportStatus::Pending,
            at(2023, 10, 27, 14),
        ),
        report(
            "report-3",
            "Crypto Gains Co.",
            ReportStatus::Rejected,
            at(2023, 10, 25, 9),
        ),
    ]
}

pub(super) fn submission() -> ReportSubmission {
    ReportSubmission {
        company_details: ScamCompanyDetails {
            name: "Acme Co".to_string(),
            address: "1 Nowhere Rd".to_string(),
            website: "https://acme.example".to_string(),
            social_media: String::new(),
            contact_numbers: "555-0000".to_string(),
        },
        scam_description: "Charged for goods that never shipped.".to_string(),
        proof_images: vec![ProofAttachment::url("https://proof.example/1.png")],
        submitted_by: UserId("user-1".to_string()),
    }
}

pub(super) fn build_service() -> (
    Arc<ReportService<MemoryReports, MemoryUsers>>,
    MemoryReports,
    MemoryUsers,
) {
    let reports = MemoryReports::with_seed(seed_reports());
    let users = MemoryUsers::with_seed(vec![reporter(), admin()]);
    let service = Arc::new(ReportService::new(
        Arc::new(reports.clone()),
        Arc::new(users.clone()),
        SimulatedLatency::none(),
    ));
    (service, reports, users)
}

/// Full router state with an admin session already persisted.
pub(super) fn build_router_state(
    logged_in_as: Option<&User>,
) -> ReportRouterState<MemoryReports, MemoryUsers, MemorySessions> {
    let reports = MemoryReports::with_seed(seed_reports());
    let users = Arc::new(MemoryUsers::with_seed(vec![reporter(), admin()]));
    let sessions = MemorySessions::default();
    if let Some(user) = logged_in_as {
        sessions.persist(&user.id.0);
    }

    let report_service = Arc::new(ReportService::new(
        Arc::new(reports),
        Arc::clone(&users),
        SimulatedLatency::none(),
    ));
    let identity_service = Arc::new(IdentityService::new(
        users,
        Arc::new(sessions),
        SimulatedLatency::none(),
    ));

    ReportRouterState {
        reports: report_service,
        identity: identity_service,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

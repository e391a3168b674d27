use chrono::{DateTime, TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use scam_alerts::agencies::{AgencyDirectory, VerifiedAgency};
use scam_alerts::identity::{
    Role, SessionStore, SubmitterProfile, User, UserId, UserRepository, SESSION_TOKEN_KEY,
};
use scam_alerts::reports::{
    ReportId, ReportRepository, ReportStatus, ScamCompanyDetails, ScamReport,
};
use scam_alerts::storage::RepositoryError;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryUserRepository {
    records: Arc<Mutex<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub(crate) fn seeded() -> Self {
        let repo = Self::default();
        {
            let mut guard = repo.records.lock().expect("user mutex poisoned");
            for user in seed_users() {
                guard.insert(user.id.clone(), user);
            }
        }
        repo
    }
}

impl UserRepository for InMemoryUserRepository {
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
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<HashMap<ReportId, ScamReport>>>,
}

impl InMemoryReportRepository {
    pub(crate) fn seeded() -> Self {
        let repo = Self::default();
        {
            let mut guard = repo.records.lock().expect("report mutex poisoned");
            for report in seed_reports() {
                guard.insert(report.id.clone(), report);
            }
        }
        repo
    }
}

impl ReportRepository for InMemoryReportRepository {
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

/// Key-value stand-in for the browser's local storage; the session token
/// lives under [`SESSION_TOKEN_KEY`].
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStore for InMemorySessionStore {
    fn persist(&self, token: &str) {
        let mut guard = self.slots.lock().expect("session mutex poisoned");
        guard.insert(SESSION_TOKEN_KEY.to_string(), token.to_string());
    }

    fn load(&self) -> Option<String> {
        let guard = self.slots.lock().expect("session mutex poisoned");
        guard.get(SESSION_TOKEN_KEY).cloned()
    }

    fn clear(&self) {
        let mut guard = self.slots.lock().expect("session mutex poisoned");
        guard.remove(SESSION_TOKEN_KEY);
    }
}

pub(crate) struct StaticAgencyDirectory {
    agencies: Vec<VerifiedAgency>,
}

impl StaticAgencyDirectory {
    pub(crate) fn seeded() -> Self {
        Self {
            agencies: seed_agencies(),
        }
    }
}

impl AgencyDirectory for StaticAgencyDirectory {
    fn list(&self) -> Vec<VerifiedAgency> {
        self.agencies.clone()
    }
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamp is valid")
}

pub(crate) fn seed_users() -> Vec<User> {
    vec![
        User {
            id: UserId("user-1".to_string()),
            full_name: "John Doe".to_string(),
            email: "user@example.com".to_string(),
            role: Role::User,
        },
        User {
            id: UserId("admin-1".to_string()),
            full_name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
        },
    ]
}

pub(crate) fn seed_reports() -> Vec<ScamReport> {
    let john = SubmitterProfile {
        id: UserId("user-1".to_string()),
        full_name: "John Doe".to_string(),
        email: "user@example.com".to_string(),
    };

    vec![
        ScamReport {
            id: ReportId("report-1".to_string()),
            company_details: ScamCompanyDetails {
                name: "Quick Rich Inc.".to_string(),
                address: "123 Fake St, Scamsville".to_string(),
                website: "https://quickrich.scam".to_string(),
                social_media: "facebook.com/quickrich".to_string(),
                contact_numbers: "555-1234".to_string(),
            },
            scam_description: "Promised high returns on investment but never paid out. After \
                investing, they stopped responding to all communication. Their website now \
                shows an error."
                .to_string(),
            proof_images: vec![
                "https://picsum.photos/seed/proof1/400/300".to_string(),
                "https://picsum.photos/seed/proof2/400/300".to_string(),
            ],
            submitted_by: john.clone(),
            status: ReportStatus::Approved,
            created_at: timestamp(2023, 10, 26, 10, 0),
            updated_at: timestamp(2023, 10, 26, 12, 0),
        },
        ScamReport {
            id: ReportId("report-2".to_string()),
            company_details: ScamCompanyDetails {
                name: "Easy Money Ltd.".to_string(),
                address: "456 Deception Ave".to_string(),
                website: "https://easymoney.scam".to_string(),
                social_media: "instagram.com/easymoney".to_string(),
                contact_numbers: "555-5678".to_string(),
            },
            scam_description: "They sell products that are never delivered. I ordered a product \
                a month ago, they took the money but never shipped it. Customer service is a \
                bot that gives no useful information."
                .to_string(),
            proof_images: vec!["https://picsum.photos/seed/proof3/400/300".to_string()],
            submitted_by: john.clone(),
            status: ReportStatus::Pending,
            created_at: timestamp(2023, 10, 27, 14, 30),
            updated_at: timestamp(2023, 10, 27, 14, 30),
        },
        ScamReport {
            id: ReportId("report-3".to_string()),
            company_details: ScamCompanyDetails {
                name: "Crypto Gains Co.".to_string(),
                address: "789 Phishing Ln".to_string(),
                website: "https://cryptogains.scam".to_string(),
                social_media: "twitter.com/cryptogainsco".to_string(),
                contact_numbers: "555-8765".to_string(),
            },
            scam_description: "A classic crypto phishing scam. They ask for your wallet seed \
                phrase to \"verify\" your account for a big airdrop, then drain all your funds."
                .to_string(),
            proof_images: Vec::new(),
            submitted_by: john,
            status: ReportStatus::Rejected,
            created_at: timestamp(2023, 10, 25, 9, 0),
            updated_at: timestamp(2023, 10, 25, 11, 0),
        },
    ]
}

pub(crate) fn seed_agencies() -> Vec<VerifiedAgency> {
    vec![
        VerifiedAgency {
            id: "agency-1".to_string(),
            name: "Federal Trade Commission (FTC)".to_string(),
            description: "An independent agency of the United States government whose principal \
                mission is the enforcement of civil U.S. antitrust law and the promotion of \
                consumer protection."
                .to_string(),
            website: "https://www.ftc.gov/".to_string(),
            logo_url: "https://picsum.photos/seed/ftc/200".to_string(),
        },
        VerifiedAgency {
            id: "agency-2".to_string(),
            name: "Consumer Financial Protection Bureau (CFPB)".to_string(),
            description: "A U.S. government agency that makes sure banks, lenders, and other \
                financial companies treat you fairly."
                .to_string(),
            website: "https://www.consumerfinance.gov/".to_string(),
            logo_url: "https://picsum.photos/seed/cfpb/200".to_string(),
        },
    ]
}

//! Read-only directory of verified consumer-protection agencies. The set
//! is fixed at process start; there are no mutation operations.

pub mod router;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::latency::SimulatedLatency;

pub use router::agency_router;

/// Static reference record for a recognized consumer-protection
/// organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedAgency {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website: String,
    pub logo_url: String,
}

/// Source of the agency set. Implementations hold seed data; a real
/// backend could serve a curated table instead.
pub trait AgencyDirectory: Send + Sync {
    fn list(&self) -> Vec<VerifiedAgency>;
}

/// Service applying the mock-backend latency in front of the directory.
pub struct AgencyService<D> {
    directory: Arc<D>,
    latency: SimulatedLatency,
}

impl<D> AgencyService<D>
where
    D: AgencyDirectory + 'static,
{
    pub fn new(directory: Arc<D>, latency: SimulatedLatency) -> Self {
        Self { directory, latency }
    }

    /// The full static set; never fails.
    pub async fn list(&self) -> Vec<VerifiedAgency> {
        self.latency.wait().await;
        self.directory.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoAgencies;

    impl AgencyDirectory for TwoAgencies {
        fn list(&self) -> Vec<VerifiedAgency> {
            vec![
                VerifiedAgency {
                    id: "agency-1".to_string(),
                    name: "Federal Trade Commission (FTC)".to_string(),
                    description: "Consumer protection enforcement.".to_string(),
                    website: "https://www.ftc.gov/".to_string(),
                    logo_url: "https://picsum.photos/seed/ftc/200".to_string(),
                },
                VerifiedAgency {
                    id: "agency-2".to_string(),
                    name: "Consumer Financial Protection Bureau (CFPB)".to_string(),
                    description: "Financial fairness oversight.".to_string(),
                    website: "https://www.consumerfinance.gov/".to_string(),
                    logo_url: "https://picsum.photos/seed/cfpb/200".to_string(),
                },
            ]
        }
    }

    #[tokio::test]
    async fn list_returns_the_full_static_set() {
        let service = AgencyService::new(Arc::new(TwoAgencies), SimulatedLatency::none());

        let agencies = service.list().await;

        assert_eq!(agencies.len(), 2);
        assert_eq!(agencies[0].id, "agency-1");
    }
}

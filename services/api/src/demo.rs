use crate::infra::{
    InMemoryReportRepository, InMemorySessionStore, InMemoryUserRepository, StaticAgencyDirectory,
};
use clap::Args;
use scam_alerts::agencies::AgencyService;
use scam_alerts::error::AppError;
use scam_alerts::identity::{IdentityService, UserId};
use scam_alerts::latency::SimulatedLatency;
use scam_alerts::reports::{
    admin_listing, paginate, public_listing, ProofAttachment, ReportService, ReportStatus,
    ReportSubmission, ScamCompanyDetails, StatusFilter, PUBLIC_PAGE_SIZE,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Company name for the demo submission
    #[arg(long, default_value = "Acme Co")]
    pub(crate) company: String,
    /// Search term applied to the public listing after approval
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Proof image files to inline as data URLs (may be repeated)
    #[arg(long)]
    pub(crate) proof_image: Vec<PathBuf>,
    /// Simulated mock-backend latency in milliseconds (default: none)
    #[arg(long)]
    pub(crate) mock_latency_ms: Option<u64>,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        company,
        search,
        proof_image,
        mock_latency_ms,
    } = args;

    let latency = mock_latency_ms
        .map(SimulatedLatency::from_millis)
        .unwrap_or_else(SimulatedLatency::none);

    let users = Arc::new(InMemoryUserRepository::seeded());
    let sessions = Arc::new(InMemorySessionStore::default());
    let identity = IdentityService::new(Arc::clone(&users), sessions, latency);
    let reports = ReportService::new(
        Arc::new(InMemoryReportRepository::seeded()),
        users,
        latency,
    );
    let agencies = AgencyService::new(Arc::new(StaticAgencyDirectory::seeded()), latency);

    println!("Community scam-reporting demo");

    let admin = identity.login("admin@example.com", "demo").await?;
    println!("- logged in as {} ({})", admin.full_name, admin.role.label());

    let all = reports.list().await?;
    for filter in [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Approved,
        StatusFilter::Rejected,
    ] {
        println!(
            "- admin dashboard {:?}: {} report(s)",
            filter,
            admin_listing(&all, filter).len()
        );
    }

    let mut attachments = Vec::new();
    for path in &proof_image {
        let bytes = std::fs::read(path)?;
        let media_type = mime_guess::from_path(path).first_or_octet_stream();
        attachments.push(ProofAttachment::inline(&media_type, bytes));
    }

    let submitted = reports
        .submit(ReportSubmission {
            company_details: ScamCompanyDetails {
                name: company.clone(),
                ..ScamCompanyDetails::default()
            },
            scam_description: "Demo submission: paid in full, nothing delivered.".to_string(),
            proof_images: attachments,
            submitted_by: UserId("user-1".to_string()),
        })
        .await?;
    println!(
        "- submitted report {} for '{}' ({} proof image(s), status {})",
        submitted.id.0,
        company,
        submitted.proof_images.len(),
        submitted.status.label()
    );

    let term = search.unwrap_or_default();
    let before = public_listing(&reports.list().await?, &term);
    println!("- public listing before approval: {} report(s)", before.len());

    let approved = reports
        .update_status(&submitted.id, ReportStatus::Approved)
        .await?;
    println!(
        "- moderation: {} -> {}",
        ReportStatus::Pending.label(),
        approved.status.label()
    );

    let after = public_listing(&reports.list().await?, &term);
    let page = paginate(&after, 1, PUBLIC_PAGE_SIZE);
    println!(
        "- public listing after approval: {} report(s), page 1/{} shows {}",
        page.total_items,
        page.total_pages.max(1),
        page.items.len()
    );
    if let Some(newest) = page.items.first() {
        println!("  newest: {}", newest.company_details.name);
    }

    let directory = agencies.list().await;
    println!("- verified agencies: {}", directory.len());
    for agency in directory {
        println!("  - {}", agency.name);
    }

    Ok(())
}

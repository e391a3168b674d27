use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::SubmitterProfile;

/// Identifier wrapper for submitted reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub String);

/// Moderation status of a report. Starts at `Pending`; only an
/// administrator changes it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::Approved,
        ReportStatus::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ReportStatus::Pending => "PENDING",
            ReportStatus::Approved => "APPROVED",
            ReportStatus::Rejected => "REJECTED",
        }
    }

    /// Only approved reports are eligible for public listings. Rejected
    /// reports are retained for the administrator view, never shown
    /// publicly.
    pub const fn is_public(self) -> bool {
        matches!(self, ReportStatus::Approved)
    }
}

/// Free-text description of the accused company. Only the name is
/// required; the same company may be reported any number of times under
/// separate report records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScamCompanyDetails {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub social_media: String,
    #[serde(default)]
    pub contact_numbers: String,
}

/// Proof supplied with a submission, either an external URL or inline
/// image bytes to be embedded as a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProofAttachment {
    Url { url: String },
    Inline { media_type: String, bytes: Vec<u8> },
}

impl ProofAttachment {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    pub fn inline(media_type: &mime::Mime, bytes: Vec<u8>) -> Self {
        Self::Inline {
            media_type: media_type.essence_str().to_string(),
            bytes,
        }
    }

    /// Convert the attachment into the string reference stored on the
    /// report: URLs pass through, inline bytes become a base64 data URL.
    pub fn storage_reference(&self) -> String {
        match self {
            ProofAttachment::Url { url } => url.clone(),
            ProofAttachment::Inline { media_type, bytes } => {
                format!("data:{};base64,{}", media_type, BASE64.encode(bytes))
            }
        }
    }
}

/// Aggregate root for a community scam report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScamReport {
    pub id: ReportId,
    pub company_details: ScamCompanyDetails,
    pub scam_description: String,
    /// Ordered proof references: URLs or data URLs.
    pub proof_images: Vec<String>,
    /// Submitter snapshot captured at submission time, never refreshed.
    pub submitted_by: SubmitterProfile,
    pub status: ReportStatus,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every status change. Invariant: `created_at <= updated_at`.
    pub updated_at: DateTime<Utc>,
}

impl ScamReport {
    /// Case-insensitive substring match on the company name. The empty
    /// term matches every report.
    pub fn company_name_matches(&self, term: &str) -> bool {
        self.company_details
            .name
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

//! The student handbook: the static knowledge record answers are rendered from.
//!
//! Every field an answer reads is a typed field here, so a document missing
//! one of them fails to deserialize at startup instead of mid-request.
//! Fields the answers never read are ignored.

use nietbot_core::{NietBotError, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level key of the handbook document as published.
pub const HANDBOOK_ROOT_KEY: &str = "NIET_Student_Handbook";

#[derive(Debug, Clone, Deserialize)]
pub struct Handbook {
    pub fee_structure: FeeStructure,
    pub admission_information: AdmissionInformation,
    pub infrastructure: Infrastructure,
    pub scholarships: Scholarships,
    pub student_welfare: StudentWelfare,
    pub innovation_cell: InnovationCell,
    pub career_management_cell: CareerManagementCell,
    pub clubs_and_activities: ClubsAndActivities,
    pub rules_regulations: RulesRegulations,
    pub important_contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeeStructure {
    pub btech: BtechFees,
    pub bus_fee: BusFees,
    pub hostel_fee: HostelFee,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BtechFees {
    pub total_first_year: u64,
    /// Total when the year is paid in one installment.
    pub discounted_total: u64,
}

/// Yearly bus fee per route.
#[derive(Debug, Clone, Deserialize)]
pub struct BusFees {
    pub ghaziabad_delhi: u64,
    pub noida: u64,
    pub bulandshahr: u64,
    pub sikandrabad: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostelFee {
    /// Free-form, e.g. "95,000 - 1,45,000".
    pub range: String,
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionInformation {
    pub undergraduate: RuleList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleList {
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Infrastructure {
    pub campus: String,
    pub library: Library,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Library {
    pub timings: String,
    pub book_limit: BookLimit,
    pub fine_per_day: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookLimit {
    #[serde(rename = "UG")]
    pub ug: u32,
    #[serde(rename = "PG")]
    pub pg: u32,
    #[serde(rename = "Faculty")]
    pub faculty: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scholarships {
    pub links: ScholarshipLinks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScholarshipLinks {
    pub state_portal: String,
    pub national_portal: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentWelfare {
    pub schemes: Vec<String>,
    pub grievance_cells: GrievanceCells,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrievanceCells {
    pub student_cell: GrievanceCell,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrievanceCell {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InnovationCell {
    pub description: String,
    pub activities: Vec<String>,
}

pub type CareerManagementCell = RuleList;

#[derive(Debug, Clone, Deserialize)]
pub struct ClubsAndActivities {
    pub technical_clubs: Vec<String>,
    pub cultural_clubs: Vec<String>,
    pub social_clubs: Vec<String>,
    pub hobby_clubs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RulesRegulations {
    pub hostel: Vec<String>,
    pub campus: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub role: String,
    pub name: String,
    pub phone: String,
}

impl Handbook {
    /// Parse a handbook, either wrapped under [`HANDBOOK_ROOT_KEY`] or bare.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut doc: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| NietBotError::Knowledge(format!("Failed to parse handbook: {e}")))?;
        if let Some(inner) = doc.get_mut(HANDBOOK_ROOT_KEY) {
            doc = inner.take();
        }
        serde_json::from_value(doc)
            .map_err(|e| NietBotError::Knowledge(format!("Invalid handbook: {e}")))
    }

    /// Load the handbook from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NietBotError::Knowledge(format!("Failed to read {}: {e}", path.display()))
        })?;
        let handbook = Self::from_json_str(&content)?;
        tracing::info!(
            "📖 Handbook loaded from {} ({} contacts)",
            path.display(),
            handbook.important_contacts.len()
        );
        Ok(handbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../data/NIET_Student_Handbook.json"
    ));

    #[test]
    fn test_shipped_handbook_loads() {
        let hb = Handbook::from_json_str(SHIPPED).unwrap();
        assert_eq!(hb.fee_structure.bus_fee.noida, 46000);
        assert_eq!(hb.infrastructure.library.book_limit.ug, 4);
        assert_eq!(hb.rules_regulations.hostel.len(), 5);
        assert!(!hb.important_contacts.is_empty());
    }

    #[test]
    fn test_bare_record_accepted() {
        let mut doc: serde_json::Value = serde_json::from_str(SHIPPED).unwrap();
        let bare = doc[HANDBOOK_ROOT_KEY].take();
        let hb = Handbook::from_json_str(&bare.to_string()).unwrap();
        assert_eq!(hb.scholarships.links.national_portal, "https://scholarships.gov.in");
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut doc: serde_json::Value = serde_json::from_str(SHIPPED).unwrap();
        doc[HANDBOOK_ROOT_KEY]["fee_structure"]["bus_fee"]
            .as_object_mut()
            .unwrap()
            .remove("noida");
        let err = Handbook::from_json_str(&doc.to_string()).unwrap_err();
        assert!(matches!(err, NietBotError::Knowledge(_)));
        assert!(err.to_string().contains("noida"));
    }

    #[test]
    fn test_mistyped_field_rejected() {
        let mut doc: serde_json::Value = serde_json::from_str(SHIPPED).unwrap();
        doc[HANDBOOK_ROOT_KEY]["rules_regulations"]["hostel"] = serde_json::json!("no list");
        assert!(Handbook::from_json_str(&doc.to_string()).is_err());
    }

    #[test]
    fn test_not_json() {
        assert!(Handbook::from_json_str("{").is_err());
    }
}

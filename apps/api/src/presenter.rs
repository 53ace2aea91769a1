//! Presenter — turns a completion (or a local confirmation) into what a panel displays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const PROPERTY_RESULTS_HEADING: &str = "Suggested Properties:";
pub const MORTGAGE_ESTIMATE_HEADING: &str = "Monthly Payment Estimate:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationKind {
    /// Model output under a static heading.
    Result,
    /// Locally built success banner.
    Success,
}

/// Payload a panel writes into its own result slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub kind: PresentationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub body: String,
}

/// Completion text is passed through verbatim.
pub fn property_results(completion: String) -> Presentation {
    Presentation {
        kind: PresentationKind::Result,
        heading: Some(PROPERTY_RESULTS_HEADING.to_string()),
        body: completion,
    }
}

pub fn mortgage_estimate(completion: String) -> Presentation {
    Presentation {
        kind: PresentationKind::Result,
        heading: Some(MORTGAGE_ESTIMATE_HEADING.to_string()),
        body: completion,
    }
}

pub fn tour_confirmation(name: &str, visit_date: NaiveDate) -> Presentation {
    Presentation {
        kind: PresentationKind::Success,
        heading: None,
        body: format!("✅ Tour scheduled for {name} on {visit_date}!"),
    }
}

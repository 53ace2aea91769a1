//! The single advisor page: three panels plus the integrations sidebar.

use axum::{response::Html, Json};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::forms::{
    PropertyType, DEFAULT_LOAN_TERM, INTEREST_RATE_STEP, MAX_INTEREST_RATE, MAX_LOAN_TERM,
    MIN_HOME_PRICE, MIN_INTEREST_RATE, MIN_LOAN_TERM,
};
use crate::llm_client::prompts::fill_template;

const PAGE_TEMPLATE: &str = include_str!("index.html");

/// Placeholders only; none of these are wired to anything.
pub const INTEGRATIONS: [&str; 3] = [
    "MLS API for listings",
    "Calendar booking system",
    "CRM lead management",
];

#[derive(Debug, Serialize)]
pub struct IntegrationsResponse {
    pub integrations: Vec<&'static str>,
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(Local::now().date_naive()))
}

/// GET /api/v1/integrations
pub async fn handle_integrations() -> Json<IntegrationsResponse> {
    Json(IntegrationsResponse {
        integrations: INTEGRATIONS.to_vec(),
    })
}

/// Renders the page with widget constraints filled in. `today` bounds the tour date picker.
pub fn render_page(today: NaiveDate) -> String {
    let today = today.format("%Y-%m-%d").to_string();

    let property_type_options = PropertyType::ALL
        .iter()
        .map(|t| format!("          <option value=\"{t}\">{t}</option>"))
        .collect::<Vec<_>>()
        .join("\n");

    let integrations = INTEGRATIONS
        .iter()
        .map(|name| format!("      <li>{name}</li>"))
        .collect::<Vec<_>>()
        .join("\n");

    let min_home_price = MIN_HOME_PRICE.to_string();
    let min_interest_rate = MIN_INTEREST_RATE.to_string();
    let max_interest_rate = MAX_INTEREST_RATE.to_string();
    let interest_rate_step = INTEREST_RATE_STEP.to_string();
    let min_loan_term = MIN_LOAN_TERM.to_string();
    let max_loan_term = MAX_LOAN_TERM.to_string();
    let default_loan_term = DEFAULT_LOAN_TERM.to_string();

    fill_template(
        PAGE_TEMPLATE,
        &[
            ("today", today.as_str()),
            ("property_type_options", property_type_options.as_str()),
            ("integrations", integrations.as_str()),
            ("min_home_price", min_home_price.as_str()),
            ("min_interest_rate", min_interest_rate.as_str()),
            ("max_interest_rate", max_interest_rate.as_str()),
            ("interest_rate_step", interest_rate_step.as_str()),
            ("min_loan_term", min_loan_term.as_str()),
            ("max_loan_term", max_loan_term.as_str()),
            ("default_loan_term", default_loan_term.as_str()),
        ],
    )
}

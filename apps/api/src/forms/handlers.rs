//! Axum route handlers, one per panel submit button.

use axum::{extract::State, Json};
use chrono::Local;
use tracing::info;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::forms::prompts::{mortgage_prompt, property_search_prompt};
use crate::forms::{MortgageRequest, PropertySearchRequest, TourRequest};
use crate::presenter::{self, Presentation};
use crate::state::AppState;

/// POST /api/v1/properties/search
pub async fn handle_property_search(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PropertySearchRequest>,
) -> Result<Json<Presentation>, AppError> {
    let prompt = property_search_prompt(&request);
    info!(property_type = %request.property_type, "Submitting property search");

    let completion = state
        .llm
        .submit(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Property search failed: {e}")))?;

    Ok(Json(presenter::property_results(completion)))
}

/// POST /api/v1/mortgage/estimate
pub async fn handle_mortgage_estimate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MortgageRequest>,
) -> Result<Json<Presentation>, AppError> {
    request.validate()?;

    let prompt = mortgage_prompt(&request);
    info!(loan_term = request.loan_term, "Submitting mortgage estimate");

    let completion = state
        .llm
        .submit(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Mortgage estimate failed: {e}")))?;

    Ok(Json(presenter::mortgage_estimate(completion)))
}

/// POST /api/v1/tours
///
/// Echoes the booking back. Nothing is stored and no LLM call is made.
pub async fn handle_schedule_tour(
    ApiJson(request): ApiJson<TourRequest>,
) -> Result<Json<Presentation>, AppError> {
    request.validate(Local::now().date_naive())?;

    info!(visit_date = %request.visit_date, "Tour confirmed");
    Ok(Json(presenter::tour_confirmation(
        &request.name,
        request.visit_date,
    )))
}

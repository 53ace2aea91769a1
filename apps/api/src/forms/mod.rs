//! Form payloads for the three advisor panels.
//!
//! The page enforces the input constraints on its widgets; `validate()`
//! re-checks them here because the submit endpoints are reachable without the page.

pub mod handlers;
pub mod prompts;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const MIN_HOME_PRICE: u64 = 10_000;
pub const MIN_INTEREST_RATE: f64 = 0.1;
pub const MAX_INTEREST_RATE: f64 = 20.0;
pub const INTEREST_RATE_STEP: f64 = 0.1;
pub const MIN_LOAN_TERM: u32 = 5;
pub const MAX_LOAN_TERM: u32 = 30;
pub const DEFAULT_LOAN_TERM: u32 = 15;

/// Closed set of property kinds offered by the search panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[default]
    Apartment,
    House,
    Condo,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Condo,
        PropertyType::Townhouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property search panel. Location and budget are free text and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySearchRequest {
    pub location: String,
    pub budget: String,
    pub property_type: PropertyType,
}

/// Mortgage calculator panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageRequest {
    pub home_price: u64,
    pub down_payment: u64,
    /// Percent, e.g. `5.5` for 5.5%.
    pub interest_rate: f64,
    /// Years.
    pub loan_term: u32,
}

impl MortgageRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.home_price < MIN_HOME_PRICE {
            return Err(AppError::Validation(format!(
                "home_price must be at least {MIN_HOME_PRICE}"
            )));
        }

        if !self.interest_rate.is_finite()
            || self.interest_rate < MIN_INTEREST_RATE
            || self.interest_rate > MAX_INTEREST_RATE
        {
            return Err(AppError::Validation(format!(
                "interest_rate must be between {MIN_INTEREST_RATE} and {MAX_INTEREST_RATE}"
            )));
        }

        if !(MIN_LOAN_TERM..=MAX_LOAN_TERM).contains(&self.loan_term) {
            return Err(AppError::Validation(format!(
                "loan_term must be between {MIN_LOAN_TERM} and {MAX_LOAN_TERM} years"
            )));
        }

        Ok(())
    }
}

/// Tour scheduling panel. The email format is not checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourRequest {
    pub name: String,
    pub email: String,
    pub visit_date: NaiveDate,
}

impl TourRequest {
    /// Rejects visit dates before `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(), AppError> {
        if self.visit_date < today {
            return Err(AppError::Validation(format!(
                "visit_date must be on or after {today}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mortgage(home_price: u64, interest_rate: f64, loan_term: u32) -> MortgageRequest {
        MortgageRequest {
            home_price,
            down_payment: 0,
            interest_rate,
            loan_term,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_property_type_serde_uses_display_names() {
        let json = serde_json::to_string(&PropertyType::Townhouse).unwrap();
        assert_eq!(json, r#""Townhouse""#);
        let parsed: PropertyType = serde_json::from_str(r#""Condo""#).unwrap();
        assert_eq!(parsed, PropertyType::Condo);
    }

    #[test]
    fn test_property_type_rejects_unknown_value() {
        assert!(serde_json::from_str::<PropertyType>(r#""Castle""#).is_err());
    }

    #[test]
    fn test_property_type_all_matches_display() {
        let names: Vec<String> = PropertyType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["Apartment", "House", "Condo", "Townhouse"]);
        assert_eq!(PropertyType::default(), PropertyType::Apartment);
    }

    #[test]
    fn test_mortgage_bounds_are_inclusive() {
        assert!(mortgage(10_000, 0.1, 5).validate().is_ok());
        assert!(mortgage(10_000, 20.0, 30).validate().is_ok());
        assert!(mortgage(300_000, 5.5, DEFAULT_LOAN_TERM).validate().is_ok());
    }

    #[test]
    fn test_mortgage_home_price_below_minimum() {
        let err = mortgage(9_999, 5.0, 30).validate().unwrap_err();
        assert!(err.to_string().contains("home_price"));
    }

    #[test]
    fn test_mortgage_interest_rate_out_of_range() {
        assert!(mortgage(100_000, 0.05, 30).validate().is_err());
        assert!(mortgage(100_000, 20.1, 30).validate().is_err());
        assert!(mortgage(100_000, f64::NAN, 30).validate().is_err());
    }

    #[test]
    fn test_mortgage_loan_term_out_of_range() {
        assert!(mortgage(100_000, 5.0, 4).validate().is_err());
        let err = mortgage(100_000, 5.0, 31).validate().unwrap_err();
        assert!(err.to_string().contains("loan_term"));
    }

    #[test]
    fn test_mortgage_zero_down_payment_allowed() {
        let request = MortgageRequest {
            home_price: 250_000,
            down_payment: 0,
            interest_rate: 6.0,
            loan_term: 20,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_tour_today_is_allowed() {
        let today = date(2026, 3, 14);
        let tour = TourRequest {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
            visit_date: today,
        };
        assert!(tour.validate(today).is_ok());
    }

    #[test]
    fn test_tour_past_date_rejected() {
        let tour = TourRequest {
            name: "Alice".to_string(),
            email: String::new(),
            visit_date: date(2026, 3, 13),
        };
        let err = tour.validate(date(2026, 3, 14)).unwrap_err();
        assert!(err.to_string().contains("visit_date"));
    }

    #[test]
    fn test_tour_date_deserializes_from_iso_string() {
        let tour: TourRequest = serde_json::from_str(
            r#"{"name": "Alice", "email": "a@example.com", "visit_date": "2025-06-01"}"#,
        )
        .unwrap();
        assert_eq!(tour.visit_date, date(2025, 6, 1));
    }
}

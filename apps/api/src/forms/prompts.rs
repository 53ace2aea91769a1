// Prompt templates for the property search and mortgage panels.
// The tour panel never reaches the LLM.

use crate::forms::{MortgageRequest, PropertySearchRequest};
use crate::llm_client::prompts::fill_template;

/// Replace: {property_type}, {location}, {budget}
pub const PROPERTY_SEARCH_TEMPLATE: &str =
    "Find me {property_type} properties in {location} within a {budget} budget.";

/// Replace: {home_price}, {down_payment}, {interest_rate}, {loan_term}
pub const MORTGAGE_TEMPLATE: &str = "Calculate mortgage for a home priced at {home_price} \
    with a down payment of {down_payment}, an interest rate of {interest_rate}%, \
    and a loan term of {loan_term} years.";

pub fn property_search_prompt(request: &PropertySearchRequest) -> String {
    fill_template(
        PROPERTY_SEARCH_TEMPLATE,
        &[
            ("property_type", request.property_type.as_str()),
            ("location", request.location.as_str()),
            ("budget", request.budget.as_str()),
        ],
    )
}

pub fn mortgage_prompt(request: &MortgageRequest) -> String {
    let home_price = request.home_price.to_string();
    let down_payment = request.down_payment.to_string();
    let interest_rate = format_rate(request.interest_rate);
    let loan_term = request.loan_term.to_string();

    fill_template(
        MORTGAGE_TEMPLATE,
        &[
            ("home_price", home_price.as_str()),
            ("down_payment", down_payment.as_str()),
            ("interest_rate", interest_rate.as_str()),
            ("loan_term", loan_term.as_str()),
        ],
    )
}

/// Renders a rate the way the page's number widget shows it: always with a
/// fractional part (`5.0`, not `5`).
fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{rate:.1}")
    } else {
        rate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::PropertyType;

    fn search(location: &str, budget: &str, property_type: PropertyType) -> PropertySearchRequest {
        PropertySearchRequest {
            location: location.to_string(),
            budget: budget.to_string(),
            property_type,
        }
    }

    #[test]
    fn test_property_prompt_substitutes_verbatim() {
        let prompt = property_search_prompt(&search("Austin, TX", "$450k", PropertyType::House));
        assert_eq!(
            prompt,
            "Find me House properties in Austin, TX within a $450k budget."
        );
    }

    #[test]
    fn test_property_prompt_with_empty_fields() {
        let prompt = property_search_prompt(&search("", "", PropertyType::Apartment));
        assert_eq!(prompt, "Find me Apartment properties in  within a  budget.");
    }

    #[test]
    fn test_property_prompt_keeps_braces_in_user_input() {
        let prompt = property_search_prompt(&search("{budget}", "1M", PropertyType::Condo));
        assert_eq!(prompt, "Find me Condo properties in {budget} within a 1M budget.");
    }

    #[test]
    fn test_mortgage_prompt_reference_example() {
        let request = MortgageRequest {
            home_price: 300_000,
            down_payment: 60_000,
            interest_rate: 5.5,
            loan_term: 30,
        };
        assert_eq!(
            mortgage_prompt(&request),
            "Calculate mortgage for a home priced at 300000 with a down payment of 60000, \
             an interest rate of 5.5%, and a loan term of 30 years."
        );
    }

    #[test]
    fn test_mortgage_prompt_whole_rate_keeps_decimal() {
        let request = MortgageRequest {
            home_price: 10_000,
            down_payment: 0,
            interest_rate: 7.0,
            loan_term: 15,
        };
        assert_eq!(
            mortgage_prompt(&request),
            "Calculate mortgage for a home priced at 10000 with a down payment of 0, \
             an interest rate of 7.0%, and a loan term of 15 years."
        );
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.1), "0.1");
        assert_eq!(format_rate(20.0), "20.0");
        assert_eq!(format_rate(3.75), "3.75");
    }
}

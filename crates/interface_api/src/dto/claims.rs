//! Claim DTOs and request validation
//!
//! The HTTP layer owns claim field validation; the domain registrar trusts
//! what it receives. Messages are fixed strings asserted by clients.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use domain_insurance::Claim;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClaimRequest {
    /// Required; checked in the handler so the message stays deterministic
    #[validate(custom(function = validate_claim_date))]
    pub claim_date: Option<NaiveDate>,
    #[validate(custom(function = validate_description))]
    pub description: String,
    #[validate(custom(function = validate_amount))]
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn validate_claim_date(claim_date: &NaiveDate) -> Result<(), ValidationError> {
    if *claim_date > Utc::now().date_naive() {
        let mut err = ValidationError::new("claim_date_future");
        err.message = Some("Claim date cannot be in the future".into());
        return Err(err);
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        let mut err = ValidationError::new("description_blank");
        err.message = Some("Description must be provided".into());
        return Err(err);
    }
    if description.chars().count() > 1000 {
        let mut err = ValidationError::new("description_too_long");
        err.message = Some("Description must be at most 1000 characters".into());
        return Err(err);
    }
    Ok(())
}

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        let mut err = ValidationError::new("amount_not_positive");
        err.message = Some("Amount must be greater than zero".into());
        return Err(err);
    }
    // NUMERIC(12, 2) in the claims table caps the integer part at 10 digits
    if amount.abs().trunc() >= Decimal::from(10_000_000_000u64) {
        let mut err = ValidationError::new("amount_integer_digits");
        err.message = Some("Amount must have at most 10 integer digits".into());
        return Err(err);
    }
    if amount.normalize().scale() > 2 {
        let mut err = ValidationError::new("amount_scale");
        err.message = Some("Amount must have at most 2 decimals".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: String,
    pub car_id: String,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            car_id: claim.car_id.to_string(),
            claim_date: claim.claim_date,
            description: claim.description,
            amount: claim.amount.amount(),
            currency: claim.amount.currency().code().to_string(),
            created_at: claim.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(claim_date: Option<NaiveDate>, description: &str, amount: Decimal) -> CreateClaimRequest {
        CreateClaimRequest {
            claim_date,
            description: description.to_string(),
            amount,
            currency: default_currency(),
        }
    }

    fn past_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn messages(request: &CreateClaimRequest) -> Vec<String> {
        match request.validate() {
            Ok(()) => vec![],
            Err(errors) => errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request(Some(past_date()), "Rear bumper damage", dec!(350.75));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_future_claim_date_is_rejected() {
        let future = Utc::now().date_naive() + chrono::Days::new(1);
        let req = request(Some(future), "desc", dec!(10.00));
        assert_eq!(messages(&req), vec!["Claim date cannot be in the future"]);
    }

    #[test]
    fn test_today_is_not_in_the_future() {
        let req = request(Some(Utc::now().date_naive()), "desc", dec!(10.00));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_description_is_rejected() {
        let req = request(Some(past_date()), "   ", dec!(10.00));
        assert_eq!(messages(&req), vec!["Description must be provided"]);
    }

    #[test]
    fn test_overlong_description_is_rejected() {
        let long = "x".repeat(1001);
        let req = request(Some(past_date()), &long, dec!(10.00));
        assert_eq!(
            messages(&req),
            vec!["Description must be at most 1000 characters"]
        );
    }

    #[test]
    fn test_thousand_character_description_is_accepted() {
        let exact = "x".repeat(1000);
        let req = request(Some(past_date()), &exact, dec!(10.00));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_non_positive_amounts_are_rejected() {
        for amount in [dec!(0), dec!(-5.00)] {
            let req = request(Some(past_date()), "desc", amount);
            assert_eq!(messages(&req), vec!["Amount must be greater than zero"]);
        }
    }

    #[test]
    fn test_amount_with_eleven_integer_digits_is_rejected() {
        let req = request(Some(past_date()), "desc", dec!(99999999999.00));
        assert_eq!(
            messages(&req),
            vec!["Amount must have at most 10 integer digits"]
        );
    }

    #[test]
    fn test_amount_with_ten_integer_digits_is_accepted() {
        let req = request(Some(past_date()), "desc", dec!(9999999999.99));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_three_decimal_amount_is_rejected() {
        let req = request(Some(past_date()), "desc", dec!(10.123));
        assert_eq!(messages(&req), vec!["Amount must have at most 2 decimals"]);
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_extra_scale() {
        let req = request(Some(past_date()), "desc", dec!(10.1200));
        assert!(req.validate().is_ok());
    }
}

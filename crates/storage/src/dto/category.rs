use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for adding a scoring category to an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, message = "Max score must be at least 1"))]
    pub max_score: i32,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Decimal,
}

/// Request payload for updating a scoring category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(range(min = 1))]
    pub max_score: Option<i32>,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Option<Decimal>,
}

/// Decimal places the `categories.weight` column stores
pub const WEIGHT_SCALE: u32 = 4;

// Weights are fractions of the total: (0, 1], at most four decimals
fn validate_weight(weight: &Decimal) -> Result<(), validator::ValidationError> {
    if *weight <= Decimal::ZERO || *weight > Decimal::ONE {
        let mut error = validator::ValidationError::new("invalid_weight");
        error.message = Some("Weight must be greater than 0 and at most 1".into());
        return Err(error);
    }

    if weight.normalize().scale() > WEIGHT_SCALE {
        let mut error = validator::ValidationError::new("weight_precision");
        error.message = Some("Weight can have at most 4 decimal places".into());
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn request(weight: &str) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: "Talent".to_string(),
            max_score: 20,
            weight: Decimal::from_str(weight).unwrap(),
        }
    }

    #[test]
    fn test_weight_bounds() {
        assert!(request("0.25").validate().is_ok());
        assert!(request("1").validate().is_ok());
        assert!(request("0").validate().is_err());
        assert!(request("1.01").validate().is_err());
        assert!(request("-0.5").validate().is_err());
    }

    #[test]
    fn test_weight_precision_fits_column() {
        assert!(request("0.3333").validate().is_ok());
        assert!(request("0.25000000").validate().is_ok());
        assert!(request("0.333333").validate().is_err());
        assert!(request("0.12345").validate().is_err());
    }

    #[test]
    fn test_max_score_must_be_positive() {
        let mut req = request("0.2");
        req.max_score = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_weight_is_optional() {
        let req = UpdateCategoryRequest {
            name: None,
            max_score: None,
            weight: None,
        };
        assert!(req.validate().is_ok());

        let req = UpdateCategoryRequest {
            weight: Some(Decimal::from(2)),
            ..req
        };
        assert!(req.validate().is_err());
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Contestant;

/// Request payload for registering a contestant in an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContestantRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: i32,

    #[validate(length(min = 1, max = 255, message = "Course is required"))]
    pub course: String,

    #[validate(length(min = 1, max = 255, message = "Year level is required"))]
    pub year_level: String,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub photo_url: Option<String>,
}

/// Request payload for updating a contestant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateContestantRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 150))]
    pub age: Option<i32>,

    #[validate(length(min = 1, max = 255))]
    pub course: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub year_level: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub photo_url: Option<String>,
}

/// A contestant together with their candidate number.
///
/// Candidate numbers follow alphabetical name order and are derived on every
/// read, so renaming a contestant can renumber the whole field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NumberedContestant {
    pub candidate_number: u32,
    #[serde(flatten)]
    pub contestant: Contestant,
}

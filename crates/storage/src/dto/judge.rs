use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Judge;

/// Request payload for adding a judge to an event.
///
/// Judges created without an `access_key` are placeholders: they appear on
/// the panel but cannot submit scores until a key is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateJudgeRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Role is required"))]
    pub role: String,

    #[validate(length(
        min = 8,
        max = 255,
        message = "Access key must be between 8 and 255 characters"
    ))]
    pub access_key: Option<String>,
}

/// Request payload for updating a judge.
///
/// `access_key` is three-state: absent keeps the current key, a string
/// replaces it, and `null` removes it, turning the judge into a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_replacement_key"))]
pub struct UpdateJudgeRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub role: Option<String>,

    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<String>)]
    pub access_key: Option<Option<String>>,
}

fn validate_replacement_key(req: &UpdateJudgeRequest) -> Result<(), validator::ValidationError> {
    match &req.access_key {
        Some(Some(key)) if !(8..=255).contains(&key.len()) => {
            let mut error = validator::ValidationError::new("access_key_length");
            error.message = Some("Access key must be between 8 and 255 characters".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

// A field that is present deserializes to `Some`, even when it is `null`
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Admin view of a judge; the credential itself is never echoed back
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JudgeResponse {
    pub judge_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub role: String,
    pub has_credential: bool,
    pub created_at: NaiveDateTime,
}

/// Public/report view of a judge, labelled by panel position instead of name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnonymousJudge {
    pub judge_id: Uuid,
    pub name: String,
    pub role: String,
}

impl From<Judge> for JudgeResponse {
    fn from(judge: Judge) -> Self {
        Self {
            has_credential: !judge.is_placeholder(),
            judge_id: judge.judge_id,
            event_id: judge.event_id,
            name: judge.name,
            role: judge.role,
            created_at: judge.created_at,
        }
    }
}

/// Labels judges "Judge 1", "Judge 2", ... in the order given
pub fn anonymize_judges(judges: &[Judge]) -> Vec<AnonymousJudge> {
    judges
        .iter()
        .enumerate()
        .map(|(index, judge)| AnonymousJudge {
            judge_id: judge.judge_id,
            name: format!("Judge {}", index + 1),
            role: judge.role.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> UpdateJudgeRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_update_access_key_is_three_state() {
        assert_eq!(parse(r#"{"name": "Dr. Roberto Santos"}"#).access_key, None);
        assert_eq!(parse(r#"{"access_key": null}"#).access_key, Some(None));
        assert_eq!(
            parse(r#"{"access_key": "roberto-2024"}"#).access_key,
            Some(Some("roberto-2024".to_string()))
        );
    }

    #[test]
    fn test_update_access_key_length_is_checked() {
        assert!(parse(r#"{"access_key": "short"}"#).validate().is_err());
        assert!(parse(r#"{"access_key": null}"#).validate().is_ok());
        assert!(parse(r#"{"access_key": "long-enough-key"}"#).validate().is_ok());
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A complete pageant event roster in the interchange format read by `import`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalFormat {
    pub format_version: String,
    pub event: EventData,
    #[serde(default)]
    pub categories: Vec<CategoryData>,
    #[serde(default)]
    pub contestants: Vec<ContestantData>,
    #[serde(default)]
    pub judges: Vec<JudgeData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub event_date: NaiveDate,
    /// Make this the active event, deactivating every other one
    #[serde(default = "default_activate")]
    pub activate: bool,
}

fn default_activate() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryData {
    pub name: String,
    pub max_score: i32,
    pub weight: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestantData {
    pub name: String,
    pub age: i32,
    pub course: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeData {
    pub name: String,
    pub role: String,
    /// Judges without a key are imported as placeholders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
}

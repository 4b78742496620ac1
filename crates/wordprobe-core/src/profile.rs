use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Personal facts submitted for one generation request.
///
/// Every field is optional; the generator degrades gracefully when a
/// fact is absent. Control fields (`auth_phrase` and the generation
/// knobs) are never treated as facts and contribute no tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Profile {
    /// Full legal name, e.g. `"John Smith"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Informal name used instead of `full_name` when that is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Date of birth in `DD/MM/YYYY` form after normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Phone number; exactly 10 digits after normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Favorite or otherwise significant number, as text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lucky_number: Option<String>,
    /// Free-text tokens supplied explicitly (pet names, teams, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_words: Vec<String>,
    /// Memorable years; accepts numbers or strings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub important_years: Vec<YearValue>,
    /// Applications the person uses. Accepted but reserved; consumed by
    /// no transform today.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apps: Vec<String>,
    /// Authorization phrase checked at the boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_phrase: Option<String>,
    /// Requested candidate count; folded into the generation options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_len: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_len: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_specials: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_uppercase: Option<bool>,
}

/// Year entry; profiles in the wild write both `2015` and `"2015"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Text(String),
}

impl YearValue {
    pub fn to_text(&self) -> String {
        match self {
            YearValue::Number(value) => value.to_string(),
            YearValue::Text(value) => value.clone(),
        }
    }
}

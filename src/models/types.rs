// Analytical model record types.
// Defines the serde shape of records stored in the models data file.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Record status. Only `Confirmed` is distinguished; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelStatus {
    Confirmed,
    #[default]
    Draft,
    Other(String),
}

impl ModelStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ModelStatus::Confirmed => "Confirmed",
            ModelStatus::Draft => "Draft",
            ModelStatus::Other(s) => s,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, ModelStatus::Confirmed)
    }
}

impl From<&str> for ModelStatus {
    fn from(s: &str) -> Self {
        match s {
            "Confirmed" => ModelStatus::Confirmed,
            "Draft" => ModelStatus::Draft,
            other => ModelStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ModelStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ModelStatus::from(s.as_str()))
    }
}

/// An auto analytical model: maps a partner/product pair to an analytic account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticModel {
    pub id: u64,
    pub partner_tag: String,
    pub partner: String,
    pub product_category: String,
    pub product: String,
    /// Display label of the analytic distribution to apply.
    pub analytic_to_apply: String,
    #[serde(default)]
    pub status: ModelStatus,
    #[serde(default)]
    pub archived: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "id": 7,
            "partnerTag": "Retail",
            "partner": "Azure Interior",
            "productCategory": "Furniture",
            "product": "Desk",
            "analyticToApply": "Sales 100%",
            "status": "Confirmed",
            "archived": true
        }"#;

        let model: AnalyticModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.id, 7);
        assert_eq!(model.partner_tag, "Retail");
        assert_eq!(model.analytic_to_apply, "Sales 100%");
        assert!(model.status.is_confirmed());
        assert!(model.archived);
    }

    #[test]
    fn test_missing_status_and_archived_default() {
        let json = r#"{
            "id": 1,
            "partnerTag": "",
            "partner": "",
            "productCategory": "",
            "product": "",
            "analyticToApply": ""
        }"#;

        let model: AnalyticModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.status, ModelStatus::Draft);
        assert!(!model.archived);
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: ModelStatus = serde_json::from_str("\"Pending Review\"").unwrap();
        assert_eq!(status, ModelStatus::Other("Pending Review".to_string()));
        assert!(!status.is_confirmed());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Pending Review\"");
    }
}

// Model data sources.
// The list view reads records through `ModelSource` and never writes back.

use std::path::PathBuf;

use crate::error::{AamError, Result};
use crate::store;

use super::types::{AnalyticModel, ModelStatus};

/// Read-only access to the ordered set of analytical models.
pub trait ModelSource {
    fn list(&self) -> Result<Vec<AnalyticModel>>;

    /// Short human-readable description of where records come from.
    fn describe(&self) -> String;
}

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<AnalyticModel>,
}

impl InMemorySource {
    pub fn new(records: Vec<AnalyticModel>) -> Self {
        Self { records }
    }

    /// Built-in dataset used when no data file exists yet.
    pub fn sample() -> Self {
        let records = SAMPLE
            .iter()
            .map(
                |&(id, partner_tag, partner, product_category, product, analytic, status, archived)| {
                    AnalyticModel {
                        id,
                        partner_tag: partner_tag.to_string(),
                        partner: partner.to_string(),
                        product_category: product_category.to_string(),
                        product: product.to_string(),
                        analytic_to_apply: analytic.to_string(),
                        status: ModelStatus::from(status),
                        archived,
                    }
                },
            )
            .collect();
        Self::new(records)
    }
}

type SampleRow = (u64, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str, bool);

#[rustfmt::skip]
const SAMPLE: [SampleRow; 6] = [
    (1, "Retail",    "Azure Interior",    "Furniture",     "Office Desk",        "Sales 100%",                "Confirmed", false),
    (2, "Wholesale", "Deco Addict",       "Furniture",     "Conference Chair",   "Sales 60% / Marketing 40%", "Draft",     false),
    (3, "Retail",    "Gemini Furniture",  "Storage",       "Cabinet with Doors", "Operations 100%",           "Confirmed", false),
    (4, "Partner",   "Lumber Inc",        "Raw Materials", "Oak Plank",          "Production 100%",           "Draft",     false),
    (5, "Wholesale", "Ready Mat",         "Accessories",   "Desk Pad",           "Sales 100%",                "Confirmed", true),
    (6, "Retail",    "The Jackson Group", "Storage",       "Drawer Black",       "Marketing 100%",            "Cancelled", true),
];

impl ModelSource for InMemorySource {
    fn list(&self) -> Result<Vec<AnalyticModel>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        "built-in sample data".to_string()
    }
}

/// Records read from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ModelSource for JsonFileSource {
    fn list(&self) -> Result<Vec<AnalyticModel>> {
        let records: Option<Vec<AnalyticModel>> = store::read_json(&self.path)?;
        let records =
            records.ok_or_else(|| AamError::NotFound(self.path.display().to_string()))?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded models");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

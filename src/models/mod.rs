// Analytical model domain module.
// Record types and the data-access interface feeding the list view.

pub mod source;
pub mod types;

pub use source::{InMemorySource, JsonFileSource, ModelSource};
pub use types::{AnalyticModel, ModelStatus};

use serde::{Deserialize, Serialize};

/// Sales lead sitting in one pipeline stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub source: String,
    /// Stage id, matched against the configured `StageConfig`s
    pub stage: String,
    pub days_in_stage: u32,
    pub value_cents: u32,
}

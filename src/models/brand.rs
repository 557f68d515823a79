use serde::{Deserialize, Serialize};

/// A franchise brand and the locations that operate under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub locations: Vec<String>,
}

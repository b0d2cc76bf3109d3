use serde::{Deserialize, Serialize};

/// One entry of the career timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub period: String,
    pub company: String,
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

use serde::{Deserialize, Serialize};

/// A short cooking note shown in its own section, independent of filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: u32,
    pub title: String,
    pub text: String,
}

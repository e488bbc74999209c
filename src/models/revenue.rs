use serde::{Deserialize, Serialize};

/// Monthly revenue figure. `month` is a short unique code such as `Jan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i64,
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Query string carrying an optional result limit.
#[derive(Serialize, Deserialize, Default)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

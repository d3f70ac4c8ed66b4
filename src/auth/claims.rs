use serde::{Deserialize, Serialize};

/// JWT payload carried by session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub exp: usize, // expires at (unix timestamp)
}

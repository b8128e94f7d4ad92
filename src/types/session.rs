use sea_orm::FromQueryResult;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RSessionCreate {
    pub title: Option<String>,
    pub description: Option<String>,
}

// Serde folds a JSON null into the outer Option, so the inner one needs
// its own deserializer: null becomes Some(None), absent stays None.
fn double_option<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(Some)
}

/// Partial update. `description` distinguishes "absent" (left alone)
/// from an explicit null (cleared).
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RSessionUpdate {
    pub game_master_id: Option<Uuid>,
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RJoinSession {
    pub session_token: Option<String>,
}

/// Reduced projection returned by the /sessions/mine and
/// /sessions/invited listings.
#[derive(Serialize, Debug, FromQueryResult)]
pub struct SessionSummary {
    pub title: String,
    pub description: Option<String>,
    pub token: Option<String>,
}

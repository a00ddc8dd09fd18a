use serde::{Deserialize, Serialize};

use crate::variant::ClientVariant;

/// Body of the add-availability POST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddAvailabilityRequest {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Start of the window as entered in the form (HH:MM)
    pub start_time: String,
    /// End of the window as entered in the form (HH:MM)
    pub end_time: String,
}

/// Reply shared by the add and delete endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Error replies from the backend omit this key; absent reads as `false`
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// A delete reply together with the HTTP status it arrived with
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteReply {
    pub status: u16,
    pub body: ApiResponse,
}

/// Backend routes for one calendar, already scoped to the variant's team (if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    scope: String,
}

impl Endpoints {
    pub fn new(base_url: &str, variant: &ClientVariant) -> Self {
        let scope = match variant.team_id() {
            Some(team_id) => format!("/calendar/{}", team_id),
            None => "/calendar".to_string(),
        };

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            scope,
        }
    }

    pub fn events(&self) -> String {
        format!("{}{}/data/", self.base_url, self.scope)
    }

    pub fn add(&self) -> String {
        format!("{}{}/add/", self.base_url, self.scope)
    }

    pub fn delete(&self, event_id: u64) -> String {
        format!("{}{}/delete/{}/", self.base_url, self.scope, event_id)
    }
}

use crate::domain::skill::Skill;
use crate::storage::SkillsStorage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn SkillsStorage>,
}

/// Candidate skill posted by the client. Both fields are optional at the
/// serde level so presence checks happen in the controller, where the
/// failure status is decided.
#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateSkillRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// Accepted as a JSON number; the controller rejects non-integers.
    #[serde(default)]
    pub rate: Option<f64>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct GetSkillsResponse {
    pub skills: Vec<Skill>,
}

/// Body of every structured error response.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for registering a new team
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterTeamRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Team name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub nationality: String,
}

impl RegisterTeamRequest {
    pub fn new(name: impl Into<String>, nationality: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nationality: nationality.into(),
        }
    }
}

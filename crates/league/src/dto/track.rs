use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterTrackRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Track name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub country: String,

    #[validate(range(min = 1, message = "A race needs at least one lap"))]
    pub laps: u16,
}

impl RegisterTrackRequest {
    pub fn new(name: impl Into<String>, country: impl Into<String>, laps: u16) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            laps,
        }
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::TrackId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub track_id: TrackId,
    pub name: String,
    pub country: String,
    pub laps: u16,
    pub created_at: NaiveDateTime,
}

impl Track {
    pub(crate) fn new(name: String, country: String, laps: u16) -> Self {
        Self {
            track_id: TrackId::generate(),
            name,
            country,
            laps,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

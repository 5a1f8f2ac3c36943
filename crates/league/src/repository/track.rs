use validator::Validate;

use super::LeagueRegistry;
use crate::dto::RegisterTrackRequest;
use crate::error::{EntityKind, LeagueError, Result};
use crate::models::{NormalizedName, Track, TrackId};

impl LeagueRegistry {
    pub fn register_track(&mut self, request: RegisterTrackRequest) -> Result<TrackId> {
        request.validate()?;

        let key = NormalizedName::new(&request.name);
        if key.is_empty() {
            return Err(LeagueError::Validation(
                "name: Track name cannot be blank".to_string(),
            ));
        }
        if self.tracks.values().any(|t| key.matches(&t.name)) {
            return Err(LeagueError::DuplicateName {
                kind: EntityKind::Track,
                name: request.name,
            });
        }

        let track = Track::new(request.name.trim().to_string(), request.country, request.laps);
        let track_id = track.track_id;
        tracing::info!("Registered track {} ({} laps)", track.name, track.laps);
        self.tracks.insert(track_id, track);

        Ok(track_id)
    }
}

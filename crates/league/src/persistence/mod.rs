//! Save-file codec for a whole league.
//!
//! A league is written as one JSON document ([`LeagueSnapshot`]). Decoding
//! checks every cross-reference before a registry is handed back, so a
//! hand-edited or truncated file is rejected instead of loading half a league.

mod snapshot;
mod validator;

pub use snapshot::LeagueSnapshot;
pub use validator::{SnapshotValidator, ValidationReport};

use crate::error::Result;
use crate::repository::LeagueRegistry;

pub const FORMAT_VERSION: &str = "1.0.0";

pub fn encode(registry: &LeagueRegistry) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(&registry.to_snapshot())?;
    Ok(bytes)
}

pub fn decode(bytes: &[u8]) -> Result<LeagueRegistry> {
    let snapshot: LeagueSnapshot = serde_json::from_slice(bytes)?;
    tracing::debug!(
        "Decoded snapshot v{} saved at {}: {} team(s), {} driver(s), {} season(s)",
        snapshot.format_version,
        snapshot.saved_at,
        snapshot.teams.len(),
        snapshot.drivers.len(),
        snapshot.championships.len()
    );
    LeagueRegistry::from_snapshot(snapshot)
}

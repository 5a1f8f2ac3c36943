use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::FORMAT_VERSION;
use super::validator::SnapshotValidator;
use crate::error::Result;
use crate::models::{ChampionshipRecord, Driver, HallOfFameEntry, Team, Track};
use crate::repository::LeagueRegistry;

/// The full league state in save-file shape.
///
/// Collections keep registry order so a reloaded league lists and draws
/// drivers exactly as before it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub format_version: String,
    pub saved_at: NaiveDateTime,
    pub teams: Vec<Team>,
    pub former_teams: Vec<Team>,
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    pub championships: Vec<ChampionshipRecord>,
    pub hall_of_fame: Vec<HallOfFameEntry>,
}

impl LeagueRegistry {
    pub fn to_snapshot(&self) -> LeagueSnapshot {
        LeagueSnapshot {
            format_version: FORMAT_VERSION.to_string(),
            saved_at: chrono::Utc::now().naive_utc(),
            teams: self.teams.values().cloned().collect(),
            former_teams: self.former_teams.clone(),
            drivers: self.drivers.values().cloned().collect(),
            tracks: self.tracks.values().cloned().collect(),
            championships: self.championships.clone(),
            hall_of_fame: self.hall_of_fame.clone(),
        }
    }

    /// Rebuild a registry from a snapshot, rejecting any snapshot that breaks
    /// the league's invariants.
    pub fn from_snapshot(snapshot: LeagueSnapshot) -> Result<Self> {
        let report = SnapshotValidator::validate(&snapshot)?;
        report.log_warnings();

        let drivers = snapshot
            .drivers
            .into_iter()
            .map(|mut driver| {
                driver.set_stats(driver.stats);
                (driver.driver_id, driver)
            })
            .collect();

        Ok(Self {
            teams: snapshot.teams.into_iter().map(|t| (t.team_id, t)).collect(),
            former_teams: snapshot.former_teams,
            drivers,
            tracks: snapshot.tracks.into_iter().map(|t| (t.track_id, t)).collect(),
            championships: snapshot.championships,
            hall_of_fame: snapshot.hall_of_fame,
        })
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{DriverId, TeamId};

/// Outcome of one simulated season. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionshipRecord {
    /// 1-based and contiguous across the league's history
    pub season_index: u32,
    pub champion_driver: DriverId,
    pub champion_driver_name: String,
    /// `None` when the champion had no team and the constructor title went unawarded
    pub champion_team: Option<TeamId>,
    pub champion_team_name: Option<String>,
    pub recorded_at: NaiveDateTime,
}

impl ChampionshipRecord {
    pub fn constructor_awarded(&self) -> bool {
        self.champion_team.is_some()
    }
}

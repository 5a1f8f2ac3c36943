use serde::Serialize;

use crate::models::{Team, TeamId};

/// One row of the constructor championship table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamChampionshipTotal {
    pub team_id: TeamId,
    pub name: String,
    pub championships: u32,
    /// Non-retired drivers on the roster
    pub active_drivers: usize,
}

impl TeamChampionshipTotal {
    pub fn new(team: &Team, active_drivers: usize) -> Self {
        Self {
            team_id: team.team_id,
            name: team.name.clone(),
            championships: team.championships,
            active_drivers,
        }
    }
}

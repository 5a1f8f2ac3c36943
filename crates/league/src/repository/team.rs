use validator::Validate;

use super::LeagueRegistry;
use crate::dto::RegisterTeamRequest;
use crate::error::{EntityKind, LeagueError, Result};
use crate::models::{NormalizedName, Team, TeamId};

impl LeagueRegistry {
    /// Register a new active team.
    ///
    /// Names are unique across active and former teams: a bankrupt team's
    /// name goes with it into the former-teams list.
    pub fn register_team(&mut self, request: RegisterTeamRequest) -> Result<TeamId> {
        request.validate()?;

        let key = NormalizedName::new(&request.name);
        if key.is_empty() {
            return Err(LeagueError::Validation(
                "name: Team name cannot be blank".to_string(),
            ));
        }
        if self.team_name_taken(&key) {
            return Err(LeagueError::DuplicateName {
                kind: EntityKind::Team,
                name: request.name,
            });
        }

        let team = Team::new(request.name.trim().to_string(), request.nationality);
        let team_id = team.team_id;
        tracing::info!("Registered team {} ({})", team.name, team_id);
        self.teams.insert(team_id, team);

        Ok(team_id)
    }

    /// Move an active team to the former teams and release its drivers.
    ///
    /// Every driver pointing at the team becomes unassigned, retired drivers
    /// included. The former team keeps its roster as history.
    pub fn force_bankruptcy(&mut self, team_id: TeamId) -> Result<()> {
        let Some(mut team) = self.teams.shift_remove(&team_id) else {
            return Err(LeagueError::NotFound(format!("active team {}", team_id)));
        };

        team.bankrupt = true;

        let mut released = 0;
        for driver in self
            .drivers
            .values_mut()
            .filter(|d| d.team_id == Some(team_id))
        {
            driver.team_id = None;
            released += 1;
        }

        tracing::info!(
            "Team {} ({}) is bankrupt, {} driver(s) released",
            team.name,
            team_id,
            released
        );
        self.former_teams.push(team);

        Ok(())
    }
}

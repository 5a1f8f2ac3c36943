use super::LeagueRegistry;
use crate::error::{LeagueError, Result};
use crate::models::{ChampionshipRecord, DriverId};

impl LeagueRegistry {
    /// Driver IDs the simulator may pick from, in registration order
    pub(crate) fn eligible_driver_ids(&self) -> Vec<DriverId> {
        self.eligible_drivers().map(|d| d.driver_id).collect()
    }

    /// Apply a drawn season: age the field, crown the champion, log the record.
    ///
    /// `field` must be the eligible set the champion was drawn from.
    pub(crate) fn record_season(
        &mut self,
        field: &[DriverId],
        champion_id: DriverId,
    ) -> Result<ChampionshipRecord> {
        if !field.contains(&champion_id)
            || !self.driver(champion_id).is_some_and(|d| d.is_eligible())
        {
            return Err(LeagueError::NotFound(format!(
                "eligible driver {}",
                champion_id
            )));
        }

        for driver_id in field {
            if let Some(driver) = self.drivers.get_mut(driver_id) {
                driver.age = driver.age.saturating_add(1);
            }
        }

        let season_index = self.season_count() + 1;
        let Some(champion) = self.drivers.get_mut(&champion_id) else {
            return Err(LeagueError::NotFound(format!("driver {}", champion_id)));
        };
        champion.wdc_count += 1;

        let constructor = champion.team_id.and_then(|id| self.teams.get_mut(&id));
        let champion_team = match constructor {
            Some(team) => {
                team.championships += 1;
                champion.constructor_championships += 1;
                Some((team.team_id, team.name.clone()))
            }
            None => {
                tracing::warn!(
                    "Season {}: champion {} has no team, constructor title unawarded",
                    season_index,
                    champion.name
                );
                None
            }
        };

        let record = ChampionshipRecord {
            season_index,
            champion_driver: champion_id,
            champion_driver_name: champion.name.clone(),
            champion_team: champion_team.as_ref().map(|(id, _)| *id),
            champion_team_name: champion_team.map(|(_, name)| name),
            recorded_at: chrono::Utc::now().naive_utc(),
        };
        self.championships.push(record.clone());

        Ok(record)
    }
}

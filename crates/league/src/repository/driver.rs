use validator::Validate;

use super::LeagueRegistry;
use crate::dto::RegisterDriverRequest;
use crate::error::{EntityKind, LeagueError, Result};
use crate::models::{Driver, DriverId, DriverStats, HallOfFameEntry, NormalizedName, TeamId};

impl LeagueRegistry {
    /// Register a driver and put them on the roster of an active team
    pub fn register_driver(&mut self, request: RegisterDriverRequest) -> Result<DriverId> {
        request.validate()?;

        let key = NormalizedName::new(&request.name);
        if key.is_empty() {
            return Err(LeagueError::Validation(
                "name: Driver name cannot be blank".to_string(),
            ));
        }
        if !self.teams.contains_key(&request.team_id) {
            return Err(LeagueError::Validation(format!(
                "team_id: {} is not an active team",
                request.team_id
            )));
        }
        if self.racing_driver_name_taken(&key) {
            return Err(LeagueError::DuplicateName {
                kind: EntityKind::Driver,
                name: request.name,
            });
        }

        let team_id = request.team_id;
        let driver = Driver::new(
            request.name.trim().to_string(),
            request.nationality,
            request.age,
            request.stats,
            team_id,
        );
        let driver_id = driver.driver_id;

        if let Some(team) = self.teams.get_mut(&team_id) {
            team.drivers.push(driver_id);
            tracing::info!(
                "Registered driver {} ({}) with {} (overall {:.1})",
                driver.name,
                driver_id,
                team.name,
                driver.overall
            );
        }
        self.drivers.insert(driver_id, driver);

        Ok(driver_id)
    }

    /// Move a racing driver to another active team.
    ///
    /// Free agents are assigned the same way. The old roster loses the driver
    /// and the new roster gains them inside this one call.
    pub fn transfer_driver(&mut self, driver_id: DriverId, new_team_id: TeamId) -> Result<()> {
        let old_team_id = self
            .drivers
            .get(&driver_id)
            .filter(|d| d.is_eligible())
            .ok_or_else(|| LeagueError::NotFound(format!("active driver {}", driver_id)))?
            .team_id;
        if !self.teams.contains_key(&new_team_id) {
            return Err(LeagueError::NotFound(format!("active team {}", new_team_id)));
        }
        if old_team_id == Some(new_team_id) {
            tracing::debug!("Driver {} already drives for {}", driver_id, new_team_id);
            return Ok(());
        }

        if let Some(old_team) = old_team_id.and_then(|id| self.teams.get_mut(&id)) {
            old_team.drivers.retain(|id| *id != driver_id);
        }
        if let Some(new_team) = self.teams.get_mut(&new_team_id) {
            new_team.drivers.push(driver_id);
        }
        if let Some(driver) = self.drivers.get_mut(&driver_id) {
            driver.team_id = Some(new_team_id);
            tracing::info!(
                "Driver {} moved from {} to {}",
                driver.name,
                old_team_id.map_or_else(|| "free agency".to_string(), |id| id.to_string()),
                new_team_id
            );
        }

        Ok(())
    }

    /// Retire a racing driver. The driver stays on its team's roster for history.
    pub fn retire_driver(&mut self, driver_id: DriverId, reason: impl Into<String>) -> Result<()> {
        let driver = self
            .drivers
            .get_mut(&driver_id)
            .filter(|d| d.is_eligible())
            .ok_or_else(|| LeagueError::NotFound(format!("active driver {}", driver_id)))?;

        driver.retired = true;
        driver.retirement_reason = Some(reason.into());
        tracing::info!(
            "Driver {} retired: {}",
            driver.name,
            driver.retirement_reason.as_deref().unwrap_or_default()
        );

        Ok(())
    }

    /// Replace a racing driver's ratings; `overall` follows.
    pub fn update_driver_stats(&mut self, driver_id: DriverId, stats: DriverStats) -> Result<()> {
        stats.validate()?;

        let driver = self
            .drivers
            .get_mut(&driver_id)
            .filter(|d| d.is_eligible())
            .ok_or_else(|| LeagueError::NotFound(format!("active driver {}", driver_id)))?;

        driver.set_stats(stats);
        tracing::debug!("Driver {} stats updated, overall {:.1}", driver.name, driver.overall);

        Ok(())
    }

    /// Append a snapshot of a retired driver's career to the hall of fame.
    ///
    /// Only retired drivers can be inducted. Inducting the same driver twice
    /// appends a second entry.
    pub fn induct_to_hall_of_fame(&mut self, driver_id: DriverId) -> Result<HallOfFameEntry> {
        let driver = self
            .drivers
            .get(&driver_id)
            .ok_or_else(|| LeagueError::NotFound(format!("driver {}", driver_id)))?;
        if !driver.retired {
            return Err(LeagueError::Validation(format!(
                "{} must retire before entering the hall of fame",
                driver.name
            )));
        }

        let entry = HallOfFameEntry::snapshot(driver);
        tracing::info!(
            "{} inducted into the hall of fame ({} WDC, {} constructor titles)",
            entry.name,
            entry.wdc_count,
            entry.constructor_championships
        );
        self.hall_of_fame.push(entry.clone());

        Ok(entry)
    }
}

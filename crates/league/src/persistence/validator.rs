use std::collections::{HashMap, HashSet};

use tracing::warn;
use validator::Validate;

use super::FORMAT_VERSION;
use super::snapshot::LeagueSnapshot;
use crate::error::{LeagueError, Result};
use crate::models::{Driver, DriverId, NormalizedName, TeamId};
use crate::repository::LeagueRegistry;

pub struct SnapshotValidator;

impl SnapshotValidator {
    /// Check a snapshot before it becomes a registry. Any error rejects the
    /// whole snapshot; warnings are returned for the caller to log.
    pub fn validate(snapshot: &LeagueSnapshot) -> Result<ValidationReport> {
        let report = Self::inspect(snapshot);

        if !report.errors.is_empty() {
            Err(LeagueError::CorruptSnapshot(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }

    pub fn inspect(snapshot: &LeagueSnapshot) -> ValidationReport {
        let mut report = ValidationReport::default();

        if snapshot.format_version != FORMAT_VERSION {
            report.errors.push(format!(
                "Unsupported format version: {}. Expected {}",
                snapshot.format_version, FORMAT_VERSION
            ));
        }

        Self::check_teams(snapshot, &mut report);
        let drivers = Self::check_drivers(snapshot, &mut report);
        Self::check_rosters(snapshot, &drivers, &mut report);
        Self::check_history(snapshot, &drivers, &mut report);
        Self::check_tracks(snapshot, &mut report);

        report
    }

    fn check_teams(snapshot: &LeagueSnapshot, report: &mut ValidationReport) {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        let all = snapshot
            .teams
            .iter()
            .map(|t| (t, false))
            .chain(snapshot.former_teams.iter().map(|t| (t, true)));

        for (team, former) in all {
            if !ids.insert(team.team_id) {
                report
                    .errors
                    .push(format!("Duplicate team id: {}", team.team_id));
            }

            let key = NormalizedName::new(&team.name);
            if key.is_empty() {
                report
                    .errors
                    .push(format!("Team {} has an empty name", team.team_id));
            } else if !names.insert(key) {
                report
                    .errors
                    .push(format!("Duplicate team name: '{}'", team.name));
            }

            if former && !team.bankrupt {
                report.errors.push(format!(
                    "Former team '{}' is not marked bankrupt",
                    team.name
                ));
            }
            if !former && team.bankrupt {
                report.errors.push(format!(
                    "Bankrupt team '{}' is listed as active",
                    team.name
                ));
            }
        }
    }

    fn check_drivers<'a>(
        snapshot: &'a LeagueSnapshot,
        report: &mut ValidationReport,
    ) -> HashMap<DriverId, &'a Driver> {
        let mut drivers = HashMap::new();
        let mut racing_names = HashSet::new();
        let active_teams: HashSet<TeamId> = snapshot.teams.iter().map(|t| t.team_id).collect();

        for driver in &snapshot.drivers {
            if drivers.insert(driver.driver_id, driver).is_some() {
                report
                    .errors
                    .push(format!("Duplicate driver id: {}", driver.driver_id));
            }

            let key = NormalizedName::new(&driver.name);
            if key.is_empty() {
                report
                    .errors
                    .push(format!("Driver {} has an empty name", driver.driver_id));
            } else if driver.is_eligible() && !racing_names.insert(key) {
                report
                    .errors
                    .push(format!("Duplicate racing driver name: '{}'", driver.name));
            }

            if driver.age < Driver::MIN_AGE {
                report.errors.push(format!(
                    "Driver '{}' is {}, below the minimum age of {}",
                    driver.name,
                    driver.age,
                    Driver::MIN_AGE
                ));
            }
            if driver.stats.validate().is_err() {
                report
                    .errors
                    .push(format!("Driver '{}' has ratings outside 1-100", driver.name));
            }
            if driver.overall != driver.stats.overall() {
                report.warnings.push(format!(
                    "Driver '{}' stored overall {} does not match ratings, recomputing",
                    driver.name, driver.overall
                ));
            }

            if let Some(team_id) = driver.team_id
                && !active_teams.contains(&team_id)
            {
                report.errors.push(format!(
                    "Driver '{}' is assigned to {} which is not an active team",
                    driver.name, team_id
                ));
            }

            if !driver.retired && driver.retirement_reason.is_some() {
                report.warnings.push(format!(
                    "Driver '{}' has a retirement reason but is not retired",
                    driver.name
                ));
            }
        }

        drivers
    }

    fn check_rosters(
        snapshot: &LeagueSnapshot,
        drivers: &HashMap<DriverId, &Driver>,
        report: &mut ValidationReport,
    ) {
        for team in &snapshot.teams {
            let mut seen = HashSet::new();
            for driver_id in &team.drivers {
                if !seen.insert(driver_id) {
                    report.errors.push(format!(
                        "Team '{}' lists driver {} twice",
                        team.name, driver_id
                    ));
                }
                match drivers.get(driver_id) {
                    None => report.errors.push(format!(
                        "Team '{}' lists unknown driver {}",
                        team.name, driver_id
                    )),
                    Some(driver) if driver.team_id != Some(team.team_id) => {
                        report.errors.push(format!(
                            "Team '{}' lists '{}' who is not assigned to it",
                            team.name, driver.name
                        ))
                    }
                    Some(_) => {}
                }
            }
        }

        for driver in drivers.values() {
            let Some(team_id) = driver.team_id else {
                continue;
            };
            let listed = snapshot
                .teams
                .iter()
                .find(|t| t.team_id == team_id)
                .is_some_and(|t| t.has_driver(driver.driver_id));
            if !listed {
                report.errors.push(format!(
                    "Driver '{}' is missing from the roster of team {}",
                    driver.name, team_id
                ));
            }
        }

        for team in &snapshot.former_teams {
            for driver_id in &team.drivers {
                if !drivers.contains_key(driver_id) {
                    report.errors.push(format!(
                        "Former team '{}' lists unknown driver {}",
                        team.name, driver_id
                    ));
                }
            }
        }
    }

    fn check_history(
        snapshot: &LeagueSnapshot,
        drivers: &HashMap<DriverId, &Driver>,
        report: &mut ValidationReport,
    ) {
        let known_teams: HashSet<TeamId> = snapshot
            .teams
            .iter()
            .chain(&snapshot.former_teams)
            .map(|t| t.team_id)
            .collect();

        for (idx, record) in snapshot.championships.iter().enumerate() {
            let expected = idx as u32 + 1;
            if record.season_index != expected {
                report.errors.push(format!(
                    "Championship record {} has season index {}, expected {}",
                    idx, record.season_index, expected
                ));
            }
            if !drivers.contains_key(&record.champion_driver) {
                report.errors.push(format!(
                    "Season {} champion {} is not a known driver",
                    record.season_index, record.champion_driver
                ));
            }
            if let Some(team_id) = record.champion_team
                && !known_teams.contains(&team_id)
            {
                report.errors.push(format!(
                    "Season {} constructor champion {} is not a known team",
                    record.season_index, team_id
                ));
            }
        }

        for entry in &snapshot.hall_of_fame {
            match drivers.get(&entry.driver_id) {
                None => report.warnings.push(format!(
                    "Hall of fame entry '{}' refers to an unknown driver",
                    entry.name
                )),
                Some(driver) if !driver.retired => report.warnings.push(format!(
                    "Hall of fame entry '{}' was inducted while still racing",
                    entry.name
                )),
                Some(_) => {}
            }
        }
    }

    fn check_tracks(snapshot: &LeagueSnapshot, report: &mut ValidationReport) {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for track in &snapshot.tracks {
            if !ids.insert(track.track_id) {
                report
                    .errors
                    .push(format!("Duplicate track id: {}", track.track_id));
            }
            let key = NormalizedName::new(&track.name);
            if key.is_empty() {
                report
                    .errors
                    .push(format!("Track {} has an empty name", track.track_id));
            } else if !names.insert(key) {
                report
                    .errors
                    .push(format!("Duplicate track name: '{}'", track.name));
            }
            if track.laps == 0 {
                report
                    .errors
                    .push(format!("Track '{}' has no laps", track.name));
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

impl LeagueRegistry {
    /// Run the save-file checks against the live registry. A registry changed
    /// only through its own operations always comes back clean.
    pub fn check_consistency(&self) -> ValidationReport {
        SnapshotValidator::inspect(&self.to_snapshot())
    }
}

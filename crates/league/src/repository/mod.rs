mod driver;
mod season;
mod team;
mod track;

use indexmap::IndexMap;

use crate::dto::TeamChampionshipTotal;
use crate::models::{
    ChampionshipRecord, Driver, DriverId, HallOfFameEntry, NormalizedName, Team, TeamId, Track,
    TrackId,
};

/// Owns every collection of the league and is the only way to change them.
///
/// All mutations take `&mut self` and check their preconditions before
/// touching any collection, so a rejected call leaves the registry exactly as
/// it was. Sharing a registry across threads means wrapping the whole value in
/// one `Mutex`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueRegistry {
    pub(crate) teams: IndexMap<TeamId, Team>,
    pub(crate) former_teams: Vec<Team>,
    pub(crate) drivers: IndexMap<DriverId, Driver>,
    pub(crate) tracks: IndexMap<TrackId, Track>,
    pub(crate) championships: Vec<ChampionshipRecord>,
    pub(crate) hall_of_fame: Vec<HallOfFameEntry>,
}

impl LeagueRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active team by ID
    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.get(&team_id)
    }

    pub fn former_team(&self, team_id: TeamId) -> Option<&Team> {
        self.former_teams.iter().find(|t| t.team_id == team_id)
    }

    pub fn driver(&self, driver_id: DriverId) -> Option<&Driver> {
        self.drivers.get(&driver_id)
    }

    pub fn track(&self, track_id: TrackId) -> Option<&Track> {
        self.tracks.get(&track_id)
    }

    /// Active team holding `name`, compared in normalized form
    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        let key = NormalizedName::new(name);
        self.teams.values().find(|t| key.matches(&t.name))
    }

    /// Driver holding `name`. A racing driver wins over a retired one with the same name.
    pub fn find_driver_by_name(&self, name: &str) -> Option<&Driver> {
        let key = NormalizedName::new(name);
        let mut matching = self.drivers.values().filter(|d| key.matches(&d.name));
        let first = matching.next()?;
        if first.is_eligible() {
            return Some(first);
        }
        matching.find(|d| d.is_eligible()).or(Some(first))
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn former_teams(&self) -> &[Team] {
        &self.former_teams
    }

    pub fn drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values()
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    /// Non-retired drivers in registration order
    pub fn eligible_drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values().filter(|d| d.is_eligible())
    }

    /// Non-retired drivers without a team, e.g. after their team went bankrupt
    pub fn free_agents(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values().filter(|d| d.is_free_agent())
    }

    /// Drivers listed on a team's roster, active or former team alike
    pub fn roster(&self, team_id: TeamId) -> Option<Vec<&Driver>> {
        let team = self.team(team_id).or_else(|| self.former_team(team_id))?;
        Some(
            team.drivers
                .iter()
                .filter_map(|id| self.drivers.get(id))
                .collect(),
        )
    }

    pub fn championships(&self) -> &[ChampionshipRecord] {
        &self.championships
    }

    pub fn latest_champion(&self) -> Option<&ChampionshipRecord> {
        self.championships.last()
    }

    pub fn season_count(&self) -> u32 {
        self.championships.len() as u32
    }

    pub fn hall_of_fame(&self) -> &[HallOfFameEntry] {
        &self.hall_of_fame
    }

    /// Active teams by constructor titles, most first, ties broken by name
    pub fn team_championship_totals(&self) -> Vec<TeamChampionshipTotal> {
        let mut totals: Vec<TeamChampionshipTotal> = self
            .teams
            .values()
            .map(|team| {
                let active = team
                    .drivers
                    .iter()
                    .filter_map(|id| self.drivers.get(id))
                    .filter(|d| d.is_eligible())
                    .count();
                TeamChampionshipTotal::new(team, active)
            })
            .collect();
        totals.sort_by(|a, b| {
            b.championships
                .cmp(&a.championships)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        totals
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
            && self.former_teams.is_empty()
            && self.drivers.is_empty()
            && self.tracks.is_empty()
    }

    fn team_name_taken(&self, key: &NormalizedName) -> bool {
        self.teams.values().any(|t| key.matches(&t.name))
            || self.former_teams.iter().any(|t| key.matches(&t.name))
    }

    fn racing_driver_name_taken(&self, key: &NormalizedName) -> bool {
        self.eligible_drivers().any(|d| key.matches(&d.name))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::LeagueRegistry;
    use crate::dto::{RegisterDriverRequest, RegisterTeamRequest};
    use crate::models::{DriverId, DriverStats, TeamId};

    pub fn team(registry: &mut LeagueRegistry, name: &str) -> TeamId {
        registry
            .register_team(RegisterTeamRequest::new(name, "GB"))
            .unwrap()
    }

    pub fn driver(registry: &mut LeagueRegistry, name: &str, team_id: TeamId) -> DriverId {
        registry
            .register_driver(RegisterDriverRequest::new(
                name,
                "GB",
                24,
                DriverStats::new(70, 70, 70, 70, 70),
                team_id,
            ))
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{driver, team};
    use super::*;

    #[test]
    fn test_find_driver_prefers_racing_driver() {
        let mut registry = LeagueRegistry::new();
        let team_id = team(&mut registry, "Verde");
        let old = driver(&mut registry, "Sam Lane", team_id);
        registry.retire_driver(old, "Injury").unwrap();
        let new = driver(&mut registry, "sam lane", team_id);

        assert_eq!(registry.find_driver_by_name("Sam Lane").unwrap().driver_id, new);
    }

    #[test]
    fn test_find_driver_falls_back_to_retired() {
        let mut registry = LeagueRegistry::new();
        let team_id = team(&mut registry, "Verde");
        let old = driver(&mut registry, "Sam Lane", team_id);
        registry.retire_driver(old, "Age").unwrap();

        assert_eq!(registry.find_driver_by_name("SAM LANE").unwrap().driver_id, old);
        assert!(registry.find_driver_by_name("Nobody").is_none());
    }

    #[test]
    fn test_team_totals_ordering() {
        let mut registry = LeagueRegistry::new();
        let b = team(&mut registry, "Bravo");
        team(&mut registry, "alpha");
        team(&mut registry, "Charlie");
        registry.teams.get_mut(&b).unwrap().championships = 2;

        let names: Vec<String> = registry
            .team_championship_totals()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Bravo", "alpha", "Charlie"]);
    }

    #[test]
    fn test_team_totals_skip_retired_drivers() {
        let mut registry = LeagueRegistry::new();
        let team_id = team(&mut registry, "Veterans");
        driver(&mut registry, "Still Racing", team_id);
        let old = driver(&mut registry, "Hung Up Helmet", team_id);
        registry.retire_driver(old, "Age").unwrap();

        let totals = registry.team_championship_totals();
        assert_eq!(totals[0].active_drivers, 1);
        assert_eq!(registry.team(team_id).unwrap().drivers.len(), 2);
    }

    #[test]
    fn test_roster_of_former_team_is_readable() {
        let mut registry = LeagueRegistry::new();
        let team_id = team(&mut registry, "Gone");
        let driver_id = driver(&mut registry, "Left Behind", team_id);
        registry.force_bankruptcy(team_id).unwrap();

        let roster = registry.roster(team_id).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].driver_id, driver_id);
        assert!(registry.roster(TeamId::generate()).is_none());
    }
}

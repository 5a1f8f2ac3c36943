use anyhow::{Result, bail};
use league::LeagueRegistry;
use league::models::{DriverId, NormalizedName, Team, TeamId};

/// Resolve a team given by ID or by name. Active teams match first, then
/// former teams so bankrupt teams can still be shown. A key that parses as
/// an ID but matches none is still tried as a name.
pub fn team_id(registry: &LeagueRegistry, key: &str) -> Result<TeamId> {
    if let Ok(id) = key.parse::<TeamId>()
        && (registry.team(id).is_some() || registry.former_team(id).is_some())
    {
        return Ok(id);
    }

    if let Some(team) = registry.find_team_by_name(key) {
        return Ok(team.team_id);
    }
    let name = NormalizedName::new(key);
    match registry.former_teams().iter().find(|t| name.matches(&t.name)) {
        Some(team) => Ok(team.team_id),
        None => bail!("No team with ID or name '{}'", key),
    }
}

pub fn team<'a>(registry: &'a LeagueRegistry, key: &str) -> Result<&'a Team> {
    let id = team_id(registry, key)?;
    match registry.team(id).or_else(|| registry.former_team(id)) {
        Some(team) => Ok(team),
        None => bail!("No team with ID {}", id),
    }
}

pub fn driver_id(registry: &LeagueRegistry, key: &str) -> Result<DriverId> {
    if let Ok(id) = key.parse::<DriverId>()
        && registry.driver(id).is_some()
    {
        return Ok(id);
    }

    match registry.find_driver_by_name(key) {
        Some(driver) => Ok(driver.driver_id),
        None => bail!("No driver with ID or name '{}'", key),
    }
}

#[cfg(test)]
mod tests {
    use league::dto::{RegisterDriverRequest, RegisterTeamRequest};
    use league::models::DriverStats;

    use super::*;

    const UUID_NAME: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    #[test]
    fn test_uuid_shaped_names_resolve_by_name() {
        let mut registry = LeagueRegistry::new();
        let team = registry
            .register_team(RegisterTeamRequest::new(UUID_NAME, "NL"))
            .unwrap();
        let driver = registry
            .register_driver(RegisterDriverRequest::new(
                UUID_NAME,
                "NL",
                21,
                DriverStats::new(50, 50, 50, 50, 50),
                team,
            ))
            .unwrap();

        assert_eq!(team_id(&registry, UUID_NAME).unwrap(), team);
        assert_eq!(driver_id(&registry, UUID_NAME).unwrap(), driver);
        assert_eq!(team_id(&registry, &team.to_string()).unwrap(), team);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let registry = LeagueRegistry::new();
        let err = driver_id(&registry, UUID_NAME).unwrap_err();
        assert!(err.to_string().contains("No driver"));
        assert!(team_id(&registry, "Nobody").is_err());
    }
}

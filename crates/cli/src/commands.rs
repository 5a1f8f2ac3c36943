use anyhow::{Result, bail};
use league::dto::{RegisterDriverRequest, RegisterTeamRequest, RegisterTrackRequest};
use league::models::{ChampionshipRecord, Driver, Team};
use league::{ChampionDraw, LeagueError, LeagueRegistry, SeasonSimulator};

use crate::cli::{Command, DriverCommand, HallOfFameCommand, TeamCommand, TrackCommand};
use crate::lookup;

/// What a command printed and whether the league needs saving.
#[derive(Debug, Default)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub changed: bool,
}

impl CommandOutput {
    fn read(lines: Vec<String>) -> Self {
        Self {
            lines,
            changed: false,
        }
    }

    fn changed(line: String) -> Self {
        Self {
            lines: vec![line],
            changed: true,
        }
    }
}

/// Apply one command to an in-memory league. `init` is file-level and is
/// handled by the caller.
pub fn execute<D>(
    command: Command,
    registry: &mut LeagueRegistry,
    draw: &mut D,
) -> Result<CommandOutput>
where
    D: ChampionDraw + ?Sized,
{
    match command {
        Command::Init { .. } => bail!("init works on the save file, not on a loaded league"),
        Command::Team(cmd) => team(cmd, registry),
        Command::FormerTeams => Ok(CommandOutput::read(
            registry.former_teams().iter().map(team_line).collect(),
        )),
        Command::Driver(cmd) => driver(cmd, registry),
        Command::FreeAgents => Ok(CommandOutput::read(
            registry.free_agents().map(driver_line).collect(),
        )),
        Command::HallOfFame(cmd) => hall_of_fame(cmd, registry),
        Command::Track(cmd) => track(cmd, registry),
        Command::Simulate { seasons } => simulate(seasons, registry, draw),
        Command::Totals => Ok(CommandOutput::read(
            registry
                .team_championship_totals()
                .into_iter()
                .map(|t| {
                    format!(
                        "{}: {} championship(s), {} active driver(s)",
                        t.name, t.championships, t.active_drivers
                    )
                })
                .collect(),
        )),
        Command::History => Ok(CommandOutput::read(
            registry.championships().iter().map(season_line).collect(),
        )),
        Command::Check => {
            let report = registry.check_consistency();
            let mut lines: Vec<String> =
                report.errors.iter().map(|e| format!("error: {}", e)).collect();
            lines.extend(report.warnings.iter().map(|w| format!("warning: {}", w)));
            if lines.is_empty() {
                lines.push("League is consistent".to_string());
            }
            Ok(CommandOutput::read(lines))
        }
    }
}

fn team(cmd: TeamCommand, registry: &mut LeagueRegistry) -> Result<CommandOutput> {
    match cmd {
        TeamCommand::Add { name, nationality } => {
            let id = registry.register_team(RegisterTeamRequest::new(name, nationality))?;
            let team = registry.team(id).map(team_line).unwrap_or_default();
            Ok(CommandOutput::changed(format!("Added team {}", team)))
        }
        TeamCommand::List => Ok(CommandOutput::read(registry.teams().map(team_line).collect())),
        TeamCommand::Show { team } => {
            let team = lookup::team(registry, &team)?;
            let mut lines = vec![team_line(team)];
            for driver in registry.roster(team.team_id).unwrap_or_default() {
                lines.push(format!("  {}", driver_line(driver)));
            }
            Ok(CommandOutput::read(lines))
        }
        TeamCommand::Bankrupt { team } => {
            let id = lookup::team_id(registry, &team)?;
            registry.force_bankruptcy(id)?;
            Ok(CommandOutput::changed(format!("{} is bankrupt", team)))
        }
    }
}

fn driver(cmd: DriverCommand, registry: &mut LeagueRegistry) -> Result<CommandOutput> {
    match cmd {
        DriverCommand::Add {
            name,
            team,
            age,
            nationality,
            stats,
        } => {
            let team_id = lookup::team_id(registry, &team)?;
            let id = registry.register_driver(RegisterDriverRequest::new(
                name,
                nationality,
                age,
                stats.into(),
                team_id,
            ))?;
            let driver = registry.driver(id).map(driver_line).unwrap_or_default();
            Ok(CommandOutput::changed(format!("Added driver {}", driver)))
        }
        DriverCommand::List { all } => Ok(CommandOutput::read(
            registry
                .drivers()
                .filter(|d| all || d.is_eligible())
                .map(driver_line)
                .collect(),
        )),
        DriverCommand::Show { driver } => {
            let id = lookup::driver_id(registry, &driver)?;
            let Some(driver) = registry.driver(id) else {
                return Err(LeagueError::NotFound(format!("driver {}", id)).into());
            };
            Ok(CommandOutput::read(driver_profile(registry, driver)))
        }
        DriverCommand::Transfer { driver, to } => {
            let driver_id = lookup::driver_id(registry, &driver)?;
            let team_id = lookup::team_id(registry, &to)?;
            registry.transfer_driver(driver_id, team_id)?;
            Ok(CommandOutput::changed(format!("{} now drives for {}", driver, to)))
        }
        DriverCommand::Retire { driver, reason } => {
            let id = lookup::driver_id(registry, &driver)?;
            registry.retire_driver(id, reason.clone())?;
            Ok(CommandOutput::changed(format!("{} retired: {}", driver, reason)))
        }
        DriverCommand::Stats { driver, stats } => {
            let id = lookup::driver_id(registry, &driver)?;
            registry.update_driver_stats(id, stats.into())?;
            let overall = registry.driver(id).map(|d| d.overall).unwrap_or_default();
            Ok(CommandOutput::changed(format!(
                "{} stats updated, overall {:.1}",
                driver, overall
            )))
        }
    }
}

fn hall_of_fame(cmd: HallOfFameCommand, registry: &mut LeagueRegistry) -> Result<CommandOutput> {
    match cmd {
        HallOfFameCommand::Induct { driver } => {
            let id = lookup::driver_id(registry, &driver)?;
            let entry = registry.induct_to_hall_of_fame(id)?;
            Ok(CommandOutput::changed(format!(
                "{} inducted into the hall of fame",
                entry.name
            )))
        }
        HallOfFameCommand::List => {
            let mut lines: Vec<String> = registry
                .hall_of_fame()
                .iter()
                .map(|e| {
                    format!(
                        "{}, WDCs: {}, Constructor championships: {}, Age: {}",
                        e.name, e.wdc_count, e.constructor_championships, e.age
                    )
                })
                .collect();
            if lines.is_empty() {
                lines.push("No drivers in the hall of fame yet".to_string());
            }
            Ok(CommandOutput::read(lines))
        }
    }
}

fn track(cmd: TrackCommand, registry: &mut LeagueRegistry) -> Result<CommandOutput> {
    match cmd {
        TrackCommand::Add {
            name,
            country,
            laps,
        } => {
            registry.register_track(RegisterTrackRequest::new(name.clone(), country, laps))?;
            Ok(CommandOutput::changed(format!("Added track {} ({} laps)", name, laps)))
        }
        TrackCommand::List => Ok(CommandOutput::read(
            registry
                .tracks()
                .map(|t| format!("{} ({}), {} laps", t.name, t.country, t.laps))
                .collect(),
        )),
    }
}

fn simulate<D>(seasons: u32, registry: &mut LeagueRegistry, draw: &mut D) -> Result<CommandOutput>
where
    D: ChampionDraw + ?Sized,
{
    let records = SeasonSimulator::new().run_seasons(registry, draw, seasons)?;

    Ok(CommandOutput {
        changed: !records.is_empty(),
        lines: records.iter().map(season_line).collect(),
    })
}

fn team_line(team: &Team) -> String {
    format!(
        "{} [{}] ({}), championships: {}, drivers: {}{}",
        team.name,
        team.team_id,
        team.nationality,
        team.championships,
        team.drivers.len(),
        if team.bankrupt { ", bankrupt" } else { "" }
    )
}

fn driver_line(driver: &Driver) -> String {
    format!(
        "{} [{}] ({}), age {}, overall {:.1}{}",
        driver.name,
        driver.driver_id,
        driver.nationality,
        driver.age,
        driver.overall,
        if driver.retired { ", retired" } else { "" }
    )
}

fn driver_profile(registry: &LeagueRegistry, driver: &Driver) -> Vec<String> {
    let team = driver
        .team_id
        .and_then(|id| registry.team(id))
        .map_or("none", |t| t.name.as_str());

    let mut lines = vec![
        format!("Name: {}", driver.name),
        format!("Age: {}", driver.age),
        format!("Nationality: {}", driver.nationality),
        format!("Team: {}", team),
        format!("Overall Rating: {:.1}", driver.overall),
        format!("Racecraft: {}", driver.stats.racecraft),
        format!("Overtaking: {}", driver.stats.overtaking),
        format!("IQ: {}", driver.stats.iq),
        format!("Focus: {}", driver.stats.focus),
        format!("Potential: {}", driver.stats.potential),
        format!("WDCs: {}", driver.wdc_count),
        format!("Constructor championships: {}", driver.constructor_championships),
        format!("Retired: {}", driver.retired),
    ];
    if let Some(reason) = &driver.retirement_reason {
        lines.push(format!("Retirement Reason: {}", reason));
    }
    lines
}

fn season_line(record: &ChampionshipRecord) -> String {
    format!(
        "Season {}: WDC {}, Constructors {}",
        record.season_index,
        record.champion_driver_name,
        record
            .champion_team_name
            .as_deref()
            .unwrap_or("not awarded")
    )
}

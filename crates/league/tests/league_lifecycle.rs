//! End-to-end league lifecycle: build a league through the public API, run
//! seasons, retire and induct, then write it to disk and read it back.

use std::fs;

use league::dto::{RegisterDriverRequest, RegisterTeamRequest, RegisterTrackRequest};
use league::models::{DriverId, DriverStats, TeamId};
use league::{LeagueRegistry, SeasonSimulator, persistence};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

struct Fixture {
    registry: LeagueRegistry,
    teams: Vec<TeamId>,
    drivers: Vec<DriverId>,
}

fn build_league() -> Fixture {
    let mut registry = LeagueRegistry::new();

    let teams: Vec<TeamId> = [("Scuderia Rossa", "IT"), ("Silver Arrows", "DE"), ("Papaya", "GB")]
        .into_iter()
        .map(|(name, nationality)| {
            registry
                .register_team(RegisterTeamRequest::new(name, nationality))
                .unwrap()
        })
        .collect();

    let roster = [
        ("Carla Ruiz", "ES", 27, DriverStats::new(88, 84, 90, 85, 70), 0),
        ("Otto Brandt", "DE", 31, DriverStats::new(80, 78, 92, 90, 55), 1),
        ("Mei Tanaka", "JP", 19, DriverStats::new(72, 75, 70, 68, 97), 1),
        ("Liam Price", "GB", 23, DriverStats::new(80, 70, 60, 50, 40), 2),
        ("Noor Haddad", "LB", 35, DriverStats::new(70, 66, 85, 88, 30), 0),
    ];
    let drivers = roster
        .into_iter()
        .map(|(name, nationality, age, stats, team)| {
            registry
                .register_driver(RegisterDriverRequest::new(
                    name,
                    nationality,
                    age,
                    stats,
                    teams[team],
                ))
                .unwrap()
        })
        .collect();

    registry
        .register_track(RegisterTrackRequest::new("Autodromo Nazionale", "IT", 53))
        .unwrap();
    registry
        .register_track(RegisterTrackRequest::new("Suzuka", "JP", 53))
        .unwrap();

    Fixture {
        registry,
        teams,
        drivers,
    }
}

#[test]
fn test_full_season_cycle_stays_consistent() {
    let Fixture {
        mut registry,
        teams,
        drivers,
    } = build_league();
    let simulator = SeasonSimulator::new();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    simulator.run_seasons(&mut registry, &mut rng, 3).unwrap();
    registry.transfer_driver(drivers[2], teams[2]).unwrap();
    registry.retire_driver(drivers[4], "Retired after a long career").unwrap();
    registry.induct_to_hall_of_fame(drivers[4]).unwrap();
    registry.force_bankruptcy(teams[1]).unwrap();
    simulator.run_seasons(&mut registry, &mut rng, 4).unwrap();

    let report = registry.check_consistency();
    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);

    assert_eq!(registry.season_count(), 7);
    let wdc: u32 = registry.drivers().map(|d| d.wdc_count).sum();
    assert_eq!(wdc, 7);

    // every constructor title went to a team, or was left unawarded
    let awarded = registry
        .championships()
        .iter()
        .filter(|r| r.constructor_awarded())
        .count() as u32;
    let team_titles: u32 = registry
        .teams()
        .chain(registry.former_teams())
        .map(|t| t.championships)
        .sum();
    assert_eq!(awarded, team_titles);

    let otto = registry.driver(drivers[1]).unwrap();
    assert_eq!(otto.team_id, None);
    assert_eq!(otto.age, 31 + 7);

    let noor = registry.driver(drivers[4]).unwrap();
    assert_eq!(noor.age, 35 + 3);
    assert_eq!(registry.hall_of_fame()[0].age, 38);
}

#[test]
fn test_snapshot_round_trip_through_disk() {
    let Fixture {
        mut registry,
        teams,
        drivers,
    } = build_league();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    SeasonSimulator::new()
        .run_seasons(&mut registry, &mut rng, 5)
        .unwrap();
    registry.retire_driver(drivers[0], "Broken leg").unwrap();
    registry.induct_to_hall_of_fame(drivers[0]).unwrap();
    registry.force_bankruptcy(teams[2]).unwrap();

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("league.json");
    fs::write(&path, persistence::encode(&registry).unwrap()).unwrap();

    let restored = persistence::decode(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(restored, registry);

    let order = |r: &LeagueRegistry| r.drivers().map(|d| d.driver_id).collect::<Vec<_>>();
    assert_eq!(order(&restored), order(&registry));
    assert_eq!(restored.former_teams(), registry.former_teams());
    assert_eq!(restored.championships(), registry.championships());
    assert_eq!(restored.hall_of_fame(), registry.hall_of_fame());
    assert_eq!(
        restored.tracks().collect::<Vec<_>>(),
        registry.tracks().collect::<Vec<_>>()
    );
}

#[test]
fn test_restored_league_draws_like_the_saved_one() {
    let Fixture { registry, .. } = build_league();
    let restored = persistence::decode(&persistence::encode(&registry).unwrap()).unwrap();
    let simulator = SeasonSimulator::new();

    let mut saved = registry;
    let mut reloaded = restored;
    let a = simulator
        .run_seasons(&mut saved, &mut ChaCha8Rng::seed_from_u64(5), 6)
        .unwrap();
    let b = simulator
        .run_seasons(&mut reloaded, &mut ChaCha8Rng::seed_from_u64(5), 6)
        .unwrap();

    let champions = |records: &[league::models::ChampionshipRecord]| {
        records
            .iter()
            .map(|r| r.champion_driver)
            .collect::<Vec<_>>()
    };
    assert_eq!(champions(&a), champions(&b));
}

#[test]
fn test_truncated_file_is_rejected() {
    let Fixture { registry, .. } = build_league();
    let bytes = persistence::encode(&registry).unwrap();

    let err = persistence::decode(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, league::LeagueError::Encode(_)));
}

use rand::Rng;

use crate::error::{LeagueError, Result};
use crate::models::ChampionshipRecord;
use crate::repository::LeagueRegistry;

/// Source of the champion draw.
///
/// Every `rand` generator is a draw source, so callers pass a seeded
/// `ChaCha8Rng` for reproducible seasons or `rand::rng()` for live play.
pub trait ChampionDraw {
    /// Index of the winner in a field of `field_size` drivers. `field_size`
    /// is never zero.
    fn draw(&mut self, field_size: usize) -> usize;
}

impl<R: Rng> ChampionDraw for R {
    fn draw(&mut self, field_size: usize) -> usize {
        self.random_range(0..field_size)
    }
}

/// Advances a league one season at a time.
///
/// Holds no state of its own: the season number comes from the length of the
/// registry's championship log.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeasonSimulator;

impl SeasonSimulator {
    pub fn new() -> Self {
        Self
    }

    /// Run one season and return its championship record.
    ///
    /// Every racing driver ages a year and one of them, drawn uniformly, takes
    /// the WDC. The champion's team takes the constructor title; a champion
    /// without a team still wins, and that season's constructor title is left
    /// unawarded rather than failing the run.
    pub fn run_season<D>(
        &self,
        registry: &mut LeagueRegistry,
        draw: &mut D,
    ) -> Result<ChampionshipRecord>
    where
        D: ChampionDraw + ?Sized,
    {
        let field = registry.eligible_driver_ids();
        if field.is_empty() {
            tracing::warn!("Season skipped: no eligible drivers");
            return Err(LeagueError::NoEligibleDrivers);
        }

        let pick = draw.draw(field.len());
        let Some(&champion_id) = field.get(pick) else {
            return Err(LeagueError::Validation(format!(
                "draw picked index {} from a field of {}",
                pick,
                field.len()
            )));
        };

        let record = registry.record_season(&field, champion_id)?;
        tracing::info!(
            "Season {}: {} champion{}",
            record.season_index,
            record.champion_driver_name,
            record
                .champion_team_name
                .as_deref()
                .map(|team| format!(", {} constructors' champion", team))
                .unwrap_or_default()
        );

        Ok(record)
    }

    /// Run `count` seasons back to back.
    ///
    /// All or nothing: if any season fails, the registry is left as it was
    /// before the first one.
    pub fn run_seasons<D>(
        &self,
        registry: &mut LeagueRegistry,
        draw: &mut D,
        count: u32,
    ) -> Result<Vec<ChampionshipRecord>>
    where
        D: ChampionDraw + ?Sized,
    {
        let mut working = registry.clone();
        let mut records = Vec::new();
        for _ in 0..count {
            records.push(self.run_season(&mut working, draw)?);
        }
        *registry = working;
        Ok(records)
    }
}

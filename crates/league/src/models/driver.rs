use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{DriverId, TeamId};

/// The five ratings a driver is scored on. Each rating is in 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DriverStats {
    #[validate(range(min = 1, max = 100, message = "Racecraft must be between 1 and 100"))]
    pub racecraft: u8,

    #[validate(range(min = 1, max = 100, message = "Overtaking must be between 1 and 100"))]
    pub overtaking: u8,

    #[validate(range(min = 1, max = 100, message = "IQ must be between 1 and 100"))]
    pub iq: u8,

    #[validate(range(min = 1, max = 100, message = "Focus must be between 1 and 100"))]
    pub focus: u8,

    #[validate(range(min = 1, max = 100, message = "Potential must be between 1 and 100"))]
    pub potential: u8,
}

impl DriverStats {
    pub fn new(racecraft: u8, overtaking: u8, iq: u8, focus: u8, potential: u8) -> Self {
        Self {
            racecraft,
            overtaking,
            iq,
            focus,
            potential,
        }
    }

    /// Arithmetic mean of the five ratings
    pub fn overall(&self) -> f64 {
        let sum = u32::from(self.racecraft)
            + u32::from(self.overtaking)
            + u32::from(self.iq)
            + u32::from(self.focus)
            + u32::from(self.potential);
        f64::from(sum) / 5.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub driver_id: DriverId,
    pub name: String,
    pub nationality: String,
    pub age: u16,
    pub stats: DriverStats,
    /// Always `stats.overall()`; stored so saved leagues read without recomputing.
    pub overall: f64,
    pub team_id: Option<TeamId>,
    pub retired: bool,
    pub retirement_reason: Option<String>,
    pub wdc_count: u32,
    pub constructor_championships: u32,
    pub created_at: NaiveDateTime,
}

impl Driver {
    pub const MIN_AGE: u16 = 18;

    pub(crate) fn new(
        name: String,
        nationality: String,
        age: u16,
        stats: DriverStats,
        team_id: TeamId,
    ) -> Self {
        Self {
            driver_id: DriverId::generate(),
            name,
            nationality,
            age,
            overall: stats.overall(),
            stats,
            team_id: Some(team_id),
            retired: false,
            retirement_reason: None,
            wdc_count: 0,
            constructor_championships: 0,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Retired drivers keep their record but never race again.
    pub fn is_eligible(&self) -> bool {
        !self.retired
    }

    pub fn is_free_agent(&self) -> bool {
        !self.retired && self.team_id.is_none()
    }

    pub(crate) fn set_stats(&mut self, stats: DriverStats) {
        self.stats = stats;
        self.overall = stats.overall();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_mean_of_five() {
        let stats = DriverStats::new(80, 70, 60, 50, 40);
        assert_eq!(stats.overall(), 60.0);
    }

    #[test]
    fn test_overall_keeps_fraction() {
        let stats = DriverStats::new(100, 100, 100, 100, 99);
        assert_eq!(stats.overall(), 99.8);
    }

    #[test]
    fn test_stats_range_validation() {
        assert!(DriverStats::new(1, 100, 50, 50, 50).validate().is_ok());
        assert!(DriverStats::new(0, 50, 50, 50, 50).validate().is_err());
        assert!(DriverStats::new(50, 50, 101, 50, 50).validate().is_err());
    }

    #[test]
    fn test_set_stats_recomputes_overall() {
        let mut driver = Driver::new(
            "Test Driver".to_string(),
            "NL".to_string(),
            21,
            DriverStats::new(50, 50, 50, 50, 50),
            TeamId::generate(),
        );
        assert_eq!(driver.overall, 50.0);

        driver.set_stats(DriverStats::new(80, 70, 60, 50, 40));
        assert_eq!(driver.overall, 60.0);
        assert_eq!(driver.stats.racecraft, 80);
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{DriverStats, TeamId};

/// Request payload for registering a new driver on an active team
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDriverRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Driver name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub nationality: String,

    #[validate(range(min = 18, message = "Drivers must be at least 18 years old"))]
    pub age: u16,

    #[validate(nested)]
    pub stats: DriverStats,

    pub team_id: TeamId,
}

impl RegisterDriverRequest {
    pub fn new(
        name: impl Into<String>,
        nationality: impl Into<String>,
        age: u16,
        stats: DriverStats,
        team_id: TeamId,
    ) -> Self {
        Self {
            name: name.into(),
            nationality: nationality.into(),
            age,
            stats,
            team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(age: u16, stats: DriverStats) -> RegisterDriverRequest {
        RegisterDriverRequest::new("Ayrton", "BR", age, stats, TeamId::generate())
    }

    #[test]
    fn test_valid_request() {
        assert!(request(18, DriverStats::new(50, 50, 50, 50, 50)).validate().is_ok());
    }

    #[test]
    fn test_underage_rejected() {
        assert!(request(17, DriverStats::new(50, 50, 50, 50, 50)).validate().is_err());
    }

    #[test]
    fn test_nested_stats_rejected() {
        let err: crate::LeagueError = request(25, DriverStats::new(50, 50, 50, 0, 50))
            .validate()
            .unwrap_err()
            .into();
        assert!(err.to_string().contains("stats.focus"));
    }
}

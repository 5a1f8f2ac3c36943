use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{DriverId, TeamId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub nationality: String,
    pub championships: u32,
    pub bankrupt: bool,
    /// Registration order. Retired drivers stay listed; a former team keeps
    /// the roster it had when it went bankrupt.
    pub drivers: Vec<DriverId>,
    pub created_at: NaiveDateTime,
}

impl Team {
    pub(crate) fn new(name: String, nationality: String) -> Self {
        Self {
            team_id: TeamId::generate(),
            name,
            nationality,
            championships: 0,
            bankrupt: false,
            drivers: Vec::new(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn has_driver(&self, driver_id: DriverId) -> bool {
        self.drivers.contains(&driver_id)
    }
}

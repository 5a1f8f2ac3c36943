use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Driver, DriverId};

/// Career totals copied out of a driver record at induction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFameEntry {
    pub driver_id: DriverId,
    pub name: String,
    pub wdc_count: u32,
    pub constructor_championships: u32,
    pub age: u16,
    pub inducted_at: NaiveDateTime,
}

impl HallOfFameEntry {
    pub(crate) fn snapshot(driver: &Driver) -> Self {
        Self {
            driver_id: driver.driver_id,
            name: driver.name.clone(),
            wdc_count: driver.wdc_count,
            constructor_championships: driver.constructor_championships,
            age: driver.age,
            inducted_at: chrono::Utc::now().naive_utc(),
        }
    }
}

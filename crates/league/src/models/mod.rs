mod championship;
mod driver;
mod hall_of_fame;
mod ids;
mod normalized_name;
mod team;
mod track;

pub use championship::ChampionshipRecord;
pub use driver::{Driver, DriverStats};
pub use hall_of_fame::HallOfFameEntry;
pub use ids::{DriverId, TeamId, TrackId};
pub use normalized_name::NormalizedName;
pub use team::Team;
pub use track::Track;

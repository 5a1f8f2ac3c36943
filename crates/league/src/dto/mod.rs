pub mod driver;
pub mod standings;
pub mod team;
pub mod track;

pub use driver::RegisterDriverRequest;
pub use standings::TeamChampionshipTotal;
pub use team::RegisterTeamRequest;
pub use track::RegisterTrackRequest;

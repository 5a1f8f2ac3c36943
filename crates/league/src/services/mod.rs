pub mod season;

pub use season::{ChampionDraw, SeasonSimulator};

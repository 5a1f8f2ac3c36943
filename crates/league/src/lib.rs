//! Roster registry and season simulator for a fictional racing league.
//!
//! [`LeagueRegistry`] owns teams, drivers, tracks and the league's history and
//! keeps them consistent. [`SeasonSimulator`] advances the league a season at
//! a time. [`persistence`] turns a registry into a save file and back.

pub mod dto;
pub mod error;
pub mod models;
pub mod persistence;
pub mod repository;
pub mod services;

pub use error::{EntityKind, LeagueError, Result};
pub use repository::LeagueRegistry;
pub use services::{ChampionDraw, SeasonSimulator};

use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cli::Cli;

pub const DEFAULT_DATA_FILE: &str = "league.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub seed: u64,
    pub log_filter: String,
}

impl Config {
    /// Resolve settings from parsed arguments. clap has already folded in
    /// `LEAGUE_DATA_FILE` and `LEAGUE_SEED` from the environment (and `.env`).
    pub fn from_cli(cli: &Cli) -> Self {
        let log_level = if cli.verbose { "debug" } else { "info" };

        Self {
            data_file: cli
                .data_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            seed: cli.seed.unwrap_or_else(rand::random),
            log_filter: format!("league={},league_cli={}", log_level, log_level),
        }
    }

    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_explicit_arguments_win() {
        let cli = Cli::parse_from([
            "league",
            "--data-file",
            "/tmp/season.json",
            "--seed",
            "7",
            "-v",
            "totals",
        ]);
        let config = Config::from_cli(&cli);

        assert_eq!(config.data_file, PathBuf::from("/tmp/season.json"));
        assert_eq!(config.seed, 7);
        assert_eq!(config.log_filter, "league=debug,league_cli=debug");
    }

    #[test]
    fn test_same_seed_same_rng() {
        use rand::Rng;

        let cli = Cli::parse_from(["league", "--seed", "11", "history"]);
        let config = Config::from_cli(&cli);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}

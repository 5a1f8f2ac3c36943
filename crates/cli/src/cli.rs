use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use league::models::DriverStats;

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "Racing league roster manager and season simulator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Save file the league is read from and written back to
    #[arg(long, env = "LEAGUE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Seed for the season draw; a random seed is used and logged when absent
    #[arg(long, env = "LEAGUE_SEED")]
    pub seed: Option<u64>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an empty league save file
    Init {
        /// Replace an existing save file
        #[arg(long)]
        force: bool,
    },
    #[command(subcommand)]
    Team(TeamCommand),
    /// List teams that went bankrupt
    FormerTeams,
    #[command(subcommand)]
    Driver(DriverCommand),
    /// List racing drivers without a team
    FreeAgents,
    #[command(subcommand)]
    HallOfFame(HallOfFameCommand),
    #[command(subcommand)]
    Track(TrackCommand),
    /// Run one or more seasons
    Simulate {
        #[arg(long, default_value_t = 1)]
        seasons: u32,
    },
    /// Constructor championship totals per active team
    Totals,
    /// Every season's champions
    History,
    /// Report consistency problems in the save file
    Check,
}

#[derive(Subcommand)]
pub enum TeamCommand {
    Add {
        name: String,

        #[arg(long, default_value = "")]
        nationality: String,
    },
    List,
    Show {
        /// Team name or ID
        team: String,
    },
    Bankrupt {
        team: String,
    },
}

#[derive(Subcommand)]
pub enum DriverCommand {
    Add {
        name: String,

        /// Team name or ID
        #[arg(long)]
        team: String,

        #[arg(long)]
        age: u16,

        #[arg(long, default_value = "")]
        nationality: String,

        #[command(flatten)]
        stats: StatsArgs,
    },
    List {
        /// Include retired drivers
        #[arg(long)]
        all: bool,
    },
    Show {
        /// Driver name or ID
        driver: String,
    },
    Transfer {
        driver: String,

        #[arg(long)]
        to: String,
    },
    Retire {
        driver: String,

        #[arg(long)]
        reason: String,
    },
    Stats {
        driver: String,

        #[command(flatten)]
        stats: StatsArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct StatsArgs {
    #[arg(long)]
    pub racecraft: u8,

    #[arg(long)]
    pub overtaking: u8,

    #[arg(long)]
    pub iq: u8,

    #[arg(long)]
    pub focus: u8,

    #[arg(long)]
    pub potential: u8,
}

impl From<StatsArgs> for DriverStats {
    fn from(args: StatsArgs) -> Self {
        DriverStats::new(
            args.racecraft,
            args.overtaking,
            args.iq,
            args.focus,
            args.potential,
        )
    }
}

#[derive(Subcommand)]
pub enum HallOfFameCommand {
    /// Induct a retired driver
    Induct { driver: String },
    List,
}

#[derive(Subcommand)]
pub enum TrackCommand {
    Add {
        name: String,

        #[arg(long, default_value = "")]
        country: String,

        #[arg(long)]
        laps: u16,
    },
    List,
}

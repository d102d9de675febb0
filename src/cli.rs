//! Command-line interface for the tic-tac-toe binary.

use clap::{Args, Parser, Subcommand};
use strictly_tictactoe_console::PlayerOverrides;

/// Two-player console tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game at the terminal
    Play {
        #[command(flatten)]
        players: PlayerArgs,
    },

    /// Replay a list of square numbers and print the resulting board
    Replay {
        #[command(flatten)]
        players: PlayerArgs,

        /// Square numbers (1-9) in the order they were played
        #[arg(required = true)]
        positions: Vec<String>,
    },
}

/// Player settings that override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayerArgs {
    /// Name of player 1
    #[arg(long)]
    pub player_one: Option<String>,

    /// Marker of player 1 (not a digit or whitespace; X and O pair up automatically)
    #[arg(long)]
    pub marker: Option<char>,

    /// Name of player 2
    #[arg(long)]
    pub player_two: Option<String>,
}

impl From<PlayerArgs> for PlayerOverrides {
    fn from(args: PlayerArgs) -> Self {
        PlayerOverrides::new(args.player_one, args.marker, args.player_two)
    }
}

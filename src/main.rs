//! Strictly Tic-Tac-Toe - console entry point.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayerArgs};
use strictly_tictactoe_console::{
    ConfiguredPlayers, ConsoleSetup, GameConfig, GameSession, Marker, OutputSink, Player,
    PlayerOverrides, Players, SessionError, SetupError, StdinSource, StdoutSink, TurnController,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play { players } => run_play(&config, players),
        Command::Replay { players, positions } => run_replay(&config, players, &positions),
    }
}

/// Logs go to stderr; stdout belongs to the game.
fn initialize_tracing(fallback_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Play one interactive game.
#[instrument(skip_all)]
fn run_play(config: &GameConfig, args: PlayerArgs) -> Result<()> {
    let mut input = StdinSource::new();
    let mut output = StdoutSink::new();

    let session = match config.resolve_players(&PlayerOverrides::from(args))? {
        Some(players) => GameSession::new(&mut ConfiguredPlayers::new(players)),
        None => GameSession::new(&mut ConsoleSetup::new(&mut input, &mut output)),
    };

    let mut session = match session {
        Ok(session) => session,
        Err(SessionError::Setup(SetupError::NoMarkerChosen)) => {
            info!("Player 1 did not choose a marker, exiting");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match session.play(&mut input, &mut output) {
        Ok(outcome) => {
            info!(?outcome, "Game over");
            Ok(())
        }
        Err(SessionError::InputClosed(e)) => {
            warn!(error = %e, "Leaving unfinished game");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Replay square numbers and print where they lead.
#[instrument(skip(config, args))]
fn run_replay(config: &GameConfig, args: PlayerArgs, positions: &[String]) -> Result<()> {
    let players = match config.resolve_players(&PlayerOverrides::from(args))? {
        Some(players) => players,
        None => Players::new(
            Player::new("Player 1", Marker::X),
            Player::new("Player 2", Marker::O),
        )?,
    };

    let game = TurnController::replay(players, positions)?;
    let mut output = StdoutSink::new();
    for line in game.board().render().lines() {
        output.write_line(line);
    }

    match (game.outcome(), game.active_player()) {
        (Some(outcome), _) => {
            if let Some(announcement) = outcome.announcement() {
                output.write_line(&announcement);
            }
        }
        (None, Some(player)) => output.write_line(&format!("{} to move", player.name())),
        (None, None) => {}
    }
    Ok(())
}

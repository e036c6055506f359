mod config;
mod console;

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tictactoe_common::config::{ConfigError, Validate};
use tictactoe_common::games::tictactoe::{FirstPlayerMode, MatchMode, TicTacToeGame};
use tictactoe_common::log;
use tictactoe_common::logger::{self, LogLevel};

use config::ClientConfig;
use console::RoundOutcome;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    HumanVsComputer,
    HumanVsHuman,
    ComputerVsComputer,
}

impl From<ModeArg> for MatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::HumanVsComputer => MatchMode::HumanVsComputer,
            ModeArg::HumanVsHuman => MatchMode::HumanVsHuman,
            ModeArg::ComputerVsComputer => MatchMode::ComputerVsComputer,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Computer,
    Random,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(first: FirstArg) -> Self {
        match first {
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Computer => FirstPlayerMode::Computer,
            FirstArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe against a minimax opponent")]
struct Args {
    /// Config file, defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Who plays X (and moves first) against the computer
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Print the minimax score of every move before the computer plays
    #[arg(long)]
    show_scores: bool,

    #[arg(long)]
    log_prefix: Option<String>,

    /// Log moves and game results
    #[arg(long)]
    verbose: bool,

    /// Also log search internals
    #[arg(long)]
    debug: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ClientConfig) {
        if let Some(mode) = self.mode {
            config.game.match_mode = mode.into();
        }
        if let Some(first) = self.first {
            config.game.first_player = first.into();
        }
        if self.show_scores {
            config.show_scores = true;
        }
        if let Some(prefix) = &self.log_prefix {
            config.log_prefix = Some(prefix.clone());
        }
    }

    fn log_level(&self) -> Option<LogLevel> {
        if self.debug {
            Some(LogLevel::Debug)
        } else if self.verbose {
            Some(LogLevel::Info)
        } else {
            None
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);
    let config_manager = config::get_config_manager(&config_path);
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate().map_err(ConfigError::Validation)?;

    if let Some(level) = args.log_level() {
        logger::init_logger(config.log_prefix.clone(), level);
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", config_path.display());
    }

    let mut rng = rand::rng();
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    loop {
        let mut game = TicTacToeGame::new(&config.game, &mut rng);

        match console::play_round(&mut game, &mut input, config.show_scores)? {
            RoundOutcome::Quit => break,
            RoundOutcome::Finished(state) => {
                log!("Round finished: {}", state);
                if !console::ask_rematch(&mut input)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

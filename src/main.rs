use four_letter_wordle::cli::{CliInterface, Mode, parse_cli};
use four_letter_wordle::error::GameError;
use four_letter_wordle::game_state::{GameState, game_loop};
use four_letter_wordle::info_log;
use four_letter_wordle::logging::{LogDestination, init_logging, log_location_notice};
use four_letter_wordle::tui::TuiInterface;
use four_letter_wordle::wordbank::resolve_wordbank;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    let destination = match cli.mode {
        Mode::Tui => LogDestination::File,
        Mode::Cli => LogDestination::Stderr,
    };
    let log_path = init_logging(destination);

    let config = cli.game_config();
    let candidates = match resolve_wordbank(cli.wordbank_path.as_deref(), config.word_length) {
        Ok(candidates) => candidates,
        Err(e) => {
            eprintln!("Failed to load word list: {e}");
            return ExitCode::FAILURE;
        }
    };
    info_log!("Loaded {} candidate words", candidates.len());

    let game = match cli.seed {
        Some(seed) => GameState::new_game(&candidates, &config, &mut StdRng::seed_from_u64(seed)),
        None => GameState::new_game(&candidates, &config, &mut rand::rng()),
    };
    let mut game = match game {
        Ok(game) => game,
        Err(e) => {
            report_fatal(&e);
            return ExitCode::FAILURE;
        }
    };

    match cli.mode {
        Mode::Cli => {
            let stdin = io::stdin();
            let mut interface = CliInterface::new(stdin.lock());
            game_loop(&mut game, &mut interface);
        }
        Mode::Tui => {
            let mut interface = match TuiInterface::new(config.word_length, config.max_attempts) {
                Ok(interface) => interface,
                Err(e) => {
                    eprintln!("Failed to initialize terminal: {e}");
                    return ExitCode::FAILURE;
                }
            };
            game_loop(&mut game, &mut interface);
            // Restore the terminal before printing anything
            drop(interface);
            if let Some(message) = game.end_message() {
                println!("{message}");
            }
            if let Some(path) = &log_path {
                println!("{}", log_location_notice(path));
            }
        }
    }

    ExitCode::SUCCESS
}

fn report_fatal(error: &GameError) {
    log::error!("{error}");
    eprintln!("Cannot start game: {error}");
}

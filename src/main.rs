use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use battleships::{
    init_logging, print_board, ConsolePlayer, Game, GameConfig, GuessOutcome, GuessSource,
    JsonlSink, Outcome, RandomOpponent, RecordSink, Side,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about = "Terminal battleships against a random opponent", long_about = None)]
struct Cli {
    /// Board side length.
    #[arg(long, default_value_t = 10)]
    size: usize,
    /// Number of ships to place.
    #[arg(long, default_value_t = 4)]
    ships: usize,
    /// Length of each ship.
    #[arg(long, default_value_t = 3)]
    ship_length: usize,
    /// Guesses available to each side.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    tries: u32,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Player name recorded on result rows.
    #[arg(long, default_value = "Player")]
    name: String,
    /// File the results sink appends to, one JSON row per game.
    #[arg(long, default_value = "results.jsonl")]
    results: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig {
        board_size: cli.size,
        num_ships: cli.ships,
        ship_length: cli.ship_length,
        max_tries: cli.tries,
    };
    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    // One persistence handle for the whole process; every game appends to it.
    let mut sink = JsonlSink::new(&cli.results);

    loop {
        run_game(&config, &mut rng, &mut sink, &cli.name)?;
        if !ask_play_again()? {
            break;
        }
    }
    Ok(())
}

fn run_game(
    config: &GameConfig,
    rng: &mut SmallRng,
    sink: &mut JsonlSink,
    player_name: &str,
) -> anyhow::Result<()> {
    let session = format!("{:016x}", rng.random::<u64>());
    let mut game = Game::new(config, rng)?;
    let mut human = ConsolePlayer::new();
    let mut cpu = RandomOpponent::new();

    println!(
        "\nWelcome to Battleships! {} ships of length {} are hidden on a {}x{} board.",
        config.num_ships, config.ship_length, config.board_size, config.board_size
    );
    println!("Sink all {} ship cells before the opponent does.", game.total_ship_cells());

    while let Some(side) = game.side_to_move() {
        let coord = match side {
            Side::Player => {
                println!();
                print_board(game.board());
                println!(
                    "Tries left: you {}, opponent {}. Your hits: {}, opponent hits: {}.",
                    game.tries_left(Side::Player),
                    game.tries_left(Side::Opponent),
                    game.hits(Side::Player),
                    game.hits(Side::Opponent),
                );
                human.next_guess(rng, &game, side)?
            }
            Side::Opponent => cpu.next_guess(rng, &game, side)?,
        };
        let outcome = game.take_turn(coord);
        let who = match side {
            Side::Player => "You",
            Side::Opponent => "The opponent",
        };
        match outcome {
            GuessOutcome::Hit(name) => println!("{who} hit {name}!"),
            GuessOutcome::Sunk(name) => println!("{who} sank {name}!"),
            GuessOutcome::Miss => println!("{who} missed."),
        }
    }

    println!();
    print_board(game.board());
    let outcome = game
        .outcome()
        .expect("game loop exited without an outcome");
    match outcome {
        Outcome::Win => println!("You win! All enemy ships destroyed."),
        Outcome::Loss => println!("You lose. The opponent got there first."),
        Outcome::Tie => println!("It's a tie."),
    }

    let summary = game
        .summary(&session, player_name)
        .expect("finished game must produce a summary");
    if let Err(err) = sink.append(&summary) {
        // A failed write does not invalidate the finished game.
        log::error!("could not persist result for session {session}: {err}");
        eprintln!("Warning: result could not be saved ({err}).");
    }
    Ok(())
}

fn ask_play_again() -> anyhow::Result<bool> {
    print!("\nPlay again? [y/N]: ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}

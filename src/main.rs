#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::{debug, info};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging,
    ui::{format_coordinate, parse_coordinate, parse_coordinates, print_player_view},
    Game, GameError, Side, Sign,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the bot in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let the hunting bot play for you and print the final boards.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn rng_from(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let game = Game::with_rng(rng_from(seed)).map_err(|e| anyhow::anyhow!(e))?;
            info!("game {} started in the terminal", game.id());
            run_interactive(game)?;
        }
        Commands::Watch { seed } => {
            let mut game = Game::bot_vs_bot(rng_from(seed)).map_err(|e| anyhow::anyhow!(e))?;
            let winner = game.play_out().map_err(|e| anyhow::anyhow!(e))?;
            print_player_view(game.player());
            println!(
                "\nWinner: {}",
                match winner {
                    Side::Player => game.player().name(),
                    Side::Enemy => game.enemy().name(),
                }
            );
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
const HELP: &str = "\
Commands:
  ship <c> [<c> ...]  place a ship, e.g. `ship 1a 2a 3a`
  random              place the remaining ships at random
  start               start the game once every ship is placed
  shoot <c>           shoot at the enemy, e.g. `shoot 5e`
  board               print both battlefields
  help                show this text
  exit                leave the game";

#[cfg(feature = "std")]
fn sign_word(sign: Sign) -> &'static str {
    match sign {
        Sign::Hit => "hit",
        _ => "miss",
    }
}

/// Let the bot shoot while it owns the turn.
#[cfg(feature = "std")]
fn bot_turns(game: &mut Game) -> anyhow::Result<()> {
    while game.is_game_started() && !game.is_game_over() && !game.is_player_move() {
        let (coordinate, report) = game.enemy_shoot().map_err(|e| anyhow::anyhow!(e))?;
        debug!("bot shot {:?}: {:?}", coordinate, report.target_sign());
        println!(
            "{} shoots {}: {}{}",
            game.enemy().name(),
            format_coordinate(coordinate),
            sign_word(report.target_sign()),
            if report.is_killed { ", ship sunk" } else { "" }
        );
    }
    Ok(())
}

#[cfg(feature = "std")]
fn run_interactive(mut game: Game) -> anyhow::Result<()> {
    println!("{}", HELP);
    print_player_view(game.player());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.is_game_over() {
            print_player_view(game.player());
            match game.winner() {
                Some(Side::Player) => println!("\nVictory! Every enemy ship is sunk."),
                _ => println!("\nDefeat. Your fleet is gone."),
            }
            return Ok(());
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        let result: Result<(), GameError> = match command {
            "ship" => match parse_coordinates(parts) {
                Ok(coordinates) => game.player_set_ship(&coordinates).map(|id| {
                    println!(
                        "Ship {} placed, left to place: {:?}",
                        id,
                        game.player().battlefield().remaining_ship_sizes()
                    );
                }),
                Err(msg) => {
                    println!("{}", msg);
                    Ok(())
                }
            },
            "random" => game.player_auto_place().map(|()| print_player_view(game.player())),
            "start" => game.start_game().map(|()| {
                println!(
                    "Game started, {} moves first.",
                    if game.is_player_move() { game.player().name() } else { game.enemy().name() }
                );
            }),
            "shoot" => match parts.next().map(parse_coordinate) {
                Some(Ok(coordinate)) => game.player_shoot(coordinate).map(|report| {
                    println!(
                        "{}{}",
                        sign_word(report.target_sign()),
                        if report.is_killed { ", ship sunk" } else { "" }
                    );
                }),
                Some(Err(msg)) => {
                    println!("{}", msg);
                    Ok(())
                }
                None => {
                    println!("Usage: shoot <coordinate>");
                    Ok(())
                }
            },
            "board" => {
                print_player_view(game.player());
                Ok(())
            }
            "help" => {
                println!("{}", HELP);
                Ok(())
            }
            "exit" | "quit" => return Ok(()),
            other => {
                println!("Unknown command {:?}, type `help`", other);
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{}: {}", e.code(), e);
        }
        bot_turns(&mut game)?;
    }
}

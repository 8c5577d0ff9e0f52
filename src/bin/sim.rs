use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{Game, GameError, Side};
use serde_json::json;

#[derive(Parser)]
#[command(about = "Run bot-vs-bot games and print a JSON summary")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u64,
    #[arg(long, default_value_t = 0, help = "Seed of the first game; game i uses seed + i")]
    seed: u64,
}

struct Outcome {
    seed: u64,
    winner: Side,
    player_shots: usize,
    enemy_shots: usize,
}

fn run_game(seed: u64) -> Result<Outcome, GameError> {
    let mut game = Game::bot_vs_bot(SmallRng::seed_from_u64(seed))?;
    game.start_game()?;
    let (mut player_shots, mut enemy_shots) = (0, 0);
    while !game.is_game_over() {
        if game.is_player_move() {
            game.player_autoshoot()?;
            player_shots += 1;
        } else {
            game.enemy_shoot()?;
            enemy_shots += 1;
        }
    }
    let winner = game.winner().ok_or(GameError::GameOver)?;
    Ok(Outcome {
        seed,
        winner,
        player_shots,
        enemy_shots,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let handles: Vec<_> = (0..args.games)
        .map(|i| {
            let seed = args.seed.wrapping_add(i);
            tokio::task::spawn_blocking(move || run_game(seed))
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(handle.await?.map_err(|e| anyhow::anyhow!(e))?);
    }

    let player_wins = outcomes.iter().filter(|o| o.winner == Side::Player).count();
    let total_shots: usize = outcomes.iter().map(|o| o.player_shots + o.enemy_shots).sum();
    let average_shots = if outcomes.is_empty() {
        0.0
    } else {
        total_shots as f64 / outcomes.len() as f64
    };

    let result = json!({
        "games": outcomes.len(),
        "player_wins": player_wins,
        "enemy_wins": outcomes.len() - player_wins,
        "average_shots": average_shots,
        "results": outcomes.iter().map(|o| json!({
            "seed": o.seed,
            "winner": o.winner,
            "player_shots": o.player_shots,
            "enemy_shots": o.enemy_shots,
        })).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{GameEngine, GameStatus, Mark, Player, RandomPlayer};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut x_wins = 0u64;
    let mut o_wins = 0u64;
    let mut draws = 0u64;

    for i in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i));
        let mut player_x = RandomPlayer::new();
        let mut player_o = RandomPlayer::new();
        let mut engine = GameEngine::new();
        loop {
            let mark = engine.current_player();
            let player = match mark {
                Mark::X => &mut player_x,
                Mark::O => &mut player_o,
            };
            match player.select_move(&mut rng, engine.board(), mark) {
                Some((row, col)) => {
                    engine.play(row, col).map_err(|e| anyhow::anyhow!(e))?;
                }
                None => {
                    engine.no_moves_available();
                }
            }
            match engine.status() {
                GameStatus::Won(Mark::X) => {
                    x_wins += 1;
                    break;
                }
                GameStatus::Won(Mark::O) => {
                    o_wins += 1;
                    break;
                }
                GameStatus::Draw => {
                    draws += 1;
                    break;
                }
                GameStatus::InProgress => {}
            }
        }
    }

    let result = json!({
        "games": games,
        "x_wins": x_wins,
        "o_wins": o_wins,
        "draws": draws,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

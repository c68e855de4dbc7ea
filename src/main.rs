#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, print_board, GameEngine, GameStatus, HumanPlayer, Mark, MoveError, Player,
    RandomPlayer,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Terminal tic-tac-toe", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum MarkArg {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two human players sharing one keyboard.
    Pvp,
    /// Play against a computer opponent that moves at random.
    Solo {
        #[arg(long, value_enum, default_value_t = MarkArg::X, help = "Which mark you play")]
        mark: MarkArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two random-moving computer players.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
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
        Commands::Pvp => {
            let mut rng = make_rng(None);
            run_match(
                Box::new(HumanPlayer::new()),
                Box::new(HumanPlayer::new()),
                &mut rng,
            )?;
        }
        Commands::Solo { mark, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let human_mark = Mark::from(mark);
            println!("You play {}. X moves first.", human_mark);
            let (player_x, player_o): (Box<dyn Player>, Box<dyn Player>) = match human_mark {
                Mark::X => (Box::new(HumanPlayer::new()), Box::new(RandomPlayer::new())),
                Mark::O => (Box::new(RandomPlayer::new()), Box::new(HumanPlayer::new())),
            };
            run_match(player_x, player_o, &mut rng)?;
        }
        Commands::Watch { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            run_match(
                Box::new(RandomPlayer::new()),
                Box::new(RandomPlayer::new()),
                &mut rng,
            )?;
        }
    }
    Ok(())
}

/// Drive one match: request a move from the active player's source, feed it
/// to the engine, and render after every accepted move. A rejected move
/// re-requests from the same source; a source with no move to offer ends the
/// match as a draw. Board access errors cannot arise through this path and
/// are treated as fatal.
#[cfg(feature = "std")]
fn run_match(
    mut player_x: Box<dyn Player>,
    mut player_o: Box<dyn Player>,
    rng: &mut SmallRng,
) -> anyhow::Result<GameStatus> {
    let mut engine = GameEngine::new();
    print_board(engine.board());
    while engine.status() == GameStatus::InProgress {
        let mark = engine.current_player();
        let player = match mark {
            Mark::X => player_x.as_mut(),
            Mark::O => player_o.as_mut(),
        };
        let Some((row, col)) = player.select_move(rng, engine.board(), mark) else {
            engine.no_moves_available();
            break;
        };
        match engine.play(row, col) {
            Ok(_) => {
                println!("{} plays ({}, {})", mark, row, col);
                print_board(engine.board());
            }
            Err(reason @ MoveError::IllegalMove { .. }) => {
                log::info!("rejected move ({}, {}) from {}", row, col, mark);
                player.handle_rejected((row, col), &reason);
            }
            Err(fatal) => return Err(anyhow::anyhow!(fatal)),
        }
    }
    match engine.status() {
        GameStatus::Won(mark) => println!("Player {} wins!", mark),
        GameStatus::Draw => println!("It's a draw."),
        GameStatus::InProgress => {}
    }
    Ok(engine.status())
}

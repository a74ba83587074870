use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, AiPlayer, GameEngine, GameResult, Mark, Mode, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new(
        GameEngine::new(Mode::HumanVsHuman),
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
    );

    let (mut x_wins, mut o_wins, mut draws) = (0usize, 0usize, 0usize);
    for _ in 0..games {
        match session.run(&mut rng).await? {
            GameResult::Win(Mark::X) => x_wins += 1,
            GameResult::Win(Mark::O) => o_wins += 1,
            GameResult::Draw => draws += 1,
            GameResult::InProgress => {
                return Err(anyhow::anyhow!("session returned before the game ended"))
            }
        }
        session.restart();
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

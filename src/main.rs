use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{
    init_logging, prompt_post_game, ui, AiPlayer, CliPlayer, GameEngine, Mode, PostGameChoice,
    Session, DEFAULT_AI_DELAY_MS,
};
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Opponent {
    Human,
    Ai,
}

impl From<Opponent> for Mode {
    fn from(o: Opponent) -> Self {
        match o {
            Opponent::Human => Mode::HumanVsHuman,
            Opponent::Ai => Mode::HumanVsAi,
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Play in the terminal, against a friend or the computer.
    Play {
        #[arg(long, value_enum, default_value_t = Opponent::Ai)]
        mode: Opponent,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS)]
        ai_delay_ms: u64,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS)]
        ai_delay_ms: u64,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn toggle(mode: Mode) -> Mode {
    match mode {
        Mode::HumanVsHuman => Mode::HumanVsAi,
        Mode::HumanVsAi => Mode::HumanVsHuman,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            seed,
            ai_delay_ms,
        } => {
            let mut rng = make_rng(seed);
            let mut session = Session::new(
                GameEngine::new(mode.into()),
                Box::new(CliPlayer::new()),
                Box::new(CliPlayer::new()),
            )
            .with_ai_delay(Duration::from_millis(ai_delay_ms))
            .with_display(true);

            loop {
                let result = session.run(&mut rng).await?;
                println!("\n{}", ui::end_message(result, session.engine().mode()));
                match prompt_post_game() {
                    PostGameChoice::PlayAgain => session.restart(),
                    PostGameChoice::SwitchMode => {
                        let next = toggle(session.engine().mode());
                        println!("Switching to {:?}", next);
                        session.set_mode(next);
                    }
                    PostGameChoice::Quit => break,
                }
            }
        }
        Commands::Watch { seed, ai_delay_ms } => {
            let mut rng = make_rng(seed);
            let mut session = Session::new(
                GameEngine::new(Mode::HumanVsHuman),
                Box::new(AiPlayer::new()),
                Box::new(AiPlayer::new()),
            )
            .with_ai_delay(Duration::from_millis(ai_delay_ms))
            .with_display(true);
            let result = session.run(&mut rng).await?;
            println!("\n{}", ui::end_message(result, Mode::HumanVsHuman));
        }
    }
    Ok(())
}

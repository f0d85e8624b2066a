use broadside::{
    init_logging, ui::ConsoleSink, AiPlayer, BoardError, CliPlayer, GameConfig, SeededRandom,
    Session, Side, StdinInput, TargetPolicy, BOARD_SIZE,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    /// Fire only at cells not yet resolved.
    Unresolved,
    /// Fire anywhere; repeats are refused and retried.
    Blind,
}

impl From<PolicyArg> for TargetPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Unresolved => TargetPolicy::Unresolved,
            PolicyArg::Blind => TargetPolicy::Blind,
        }
    }
}

#[derive(Args, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE, help = "Board edge length (4-10)")]
    size: usize,
    #[arg(long, default_value = "5,4,3,3,2", help = "Comma separated ship lengths")]
    fleet: String,
    #[arg(long, help = "End in a draw after this many turns")]
    turn_limit: Option<u32>,
    #[arg(long, value_enum, default_value_t = PolicyArg::Unresolved)]
    policy: PolicyArg,
}

impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        match GameConfig::from_fleet_text(self.size, &self.fleet, self.turn_limit) {
            Ok(config) => Ok(config),
            Err(BoardError::Parse(e)) => {
                Err(anyhow::anyhow!("invalid --fleet '{}': {}", self.fleet, e))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn rng(&self) -> SeededRandom {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SeededRandom::from_seed(s)
            }
            None => SeededRandom::from_entropy(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the local machine.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Place your fleet randomly instead of by hand")]
        random_placement: bool,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[command(flatten)]
        game: GameArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            game,
            random_placement,
        } => {
            init_logging(LevelFilter::Warn);
            let config = game.config()?;
            let human = CliPlayer::new(StdinInput).auto_place(random_placement);
            let computer = AiPlayer::with_policy(game.policy.into());
            println!("\n════════════════════════════════════════════════════════════");
            println!("                    SHIP PLACEMENT PHASE");
            println!("════════════════════════════════════════════════════════════");
            println!("Type 'help' at any prompt for instructions, 'quit' to leave.\n");
            let mut session = Session::new(config, Box::new(human), Box::new(computer), game.rng())?;
            session.run(&mut ConsoleSink::new(Side::Player))?;
        }
        Commands::Auto { game } => {
            init_logging(LevelFilter::Info);
            let config = game.config()?;
            let first = AiPlayer::with_policy(game.policy.into());
            let second = AiPlayer::with_policy(game.policy.into());
            log::info!("both sides target with the {:?} policy", first.policy());
            let mut session = Session::new(config, Box::new(first), Box::new(second), game.rng())?;
            let result = session.run(&mut ConsoleSink::new(Side::Player))?;
            log::info!(
                "{:?} after {} shots",
                result,
                session.state().history().len()
            );
        }
    }
    Ok(())
}

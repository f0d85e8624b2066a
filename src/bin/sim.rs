use broadside::{AiPlayer, GameConfig, GameResult, LogSink, SeededRandom, Session, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if !(2..=3).contains(&args.len()) {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut results = Vec::new();
    let mut player_wins = 0u64;
    let mut opponent_wins = 0u64;
    for game_seed in (0..games).map(|i| seed.wrapping_add(i)) {
        let mut session = Session::new(
            GameConfig::standard(),
            Box::new(AiPlayer::new()),
            Box::new(AiPlayer::new()),
            SeededRandom::from_seed(game_seed),
        )?;
        let result = session.run(&mut LogSink)?;
        match result {
            GameResult::PlayerWon => player_wins += 1,
            GameResult::OpponentWon => opponent_wins += 1,
            _ => {}
        }
        let history = session.state().history();
        let shots = |side: Side| history.iter().filter(|s| s.attacker == side).count();
        results.push(json!({
            "seed": game_seed,
            "result": result,
            "player_shots": shots(Side::Player),
            "opponent_shots": shots(Side::Opponent),
        }));
    }

    let winner = match results.as_slice() {
        [single] => single["result"].clone(),
        _ => json!(null),
    };
    let summary = json!({
        "games": results,
        "player_wins": player_wins,
        "opponent_wins": opponent_wins,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

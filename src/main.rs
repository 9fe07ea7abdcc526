use clap::Parser;
use log::info;
use serde_json::json;

use gouji_engine::game::{Hand, Team};
use gouji_engine::service::{
    simulate_batch, GameConfig, GameOutcome, GameSession, SimulationConfig, TurnAction,
};

// ============================================================================
// 命令列參數
// ============================================================================

/// 全 AI 夠級對局模擬
#[derive(Parser, Debug)]
#[command(name = "gouji-sim", version, about)]
struct Args {
    /// 對局數；大於 1 時並行模擬並輸出統計
    #[arg(short, long, default_value_t = 1)]
    games: usize,

    /// 隨機種子（省略時隨機產生）
    #[arg(short, long)]
    seed: Option<u64>,

    /// 以 JSON 輸出
    #[arg(long)]
    json: bool,

    /// 單局時印出每一手
    #[arg(long)]
    history: bool,
}

// ============================================================================
// 輸出
// ============================================================================

fn print_outcome(session: &GameSession, outcome: &GameOutcome) {
    println!("Finished in {} turns", session.state().turn_count);
    for (position, &player) in outcome.ranking.iter().enumerate() {
        let name = session
            .player(player)
            .map_or("?", |p| p.name.as_str());
        println!(
            "  #{} {} (team {}) {:+}",
            position + 1,
            name,
            Team::of(player),
            outcome.player_deltas[player]
        );
    }
    println!(
        "Team A: {:+}  Team B: {:+}",
        outcome.team_scores.team_a, outcome.team_scores.team_b
    );
    match outcome.winner {
        Some(team) => println!("Winner: team {}", team),
        None => println!("Draw"),
    }
}

fn print_history(session: &GameSession) {
    for event in session.history() {
        let action = match &event.action {
            TurnAction::Played(play) => format!("plays {}", play),
            TurnAction::Passed => "passes".to_string(),
        };
        let mut line = format!("[{:>4}] player {} {}", event.turn, event.player, action);
        if let Some(position) = event.finished_position {
            line.push_str(&format!(" (finished #{})", position + 1));
        }
        if event.trick_reset {
            line.push_str(" / trick cleared");
        }
        println!("{}", line);
    }
}

fn run_single(seed: u64, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::default().with_seed(seed);
    let mut session = GameSession::from_config(&config)?;
    let outcome = session.run_to_completion()?;

    if args.json {
        let mut report = json!({
            "seed": seed,
            "state": session.state(),
            "outcome": outcome,
        });
        if args.history {
            report["history"] = serde_json::to_value(session.history())?;
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.history {
        print_history(&session);
    }
    print_outcome(&session, &outcome);

    let last = outcome.ranking[outcome.ranking.len() - 1];
    if let Some(hand) = session.hand(last) {
        let mut leftover: Hand = hand.clone();
        leftover.sort_for_display();
        let labels: Vec<String> = leftover.cards().iter().map(|c| c.to_string()).collect();
        println!("Left in last hand: {}", labels.join(" "));
    }
    Ok(())
}

fn run_batch(seed: u64, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let summary = simulate_batch(&SimulationConfig {
        games: args.games,
        seed,
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Simulated {} games (seed {})", summary.games, seed);
    println!(
        "Team A wins: {}  Team B wins: {}  Draws: {}",
        summary.team_a_wins, summary.team_b_wins, summary.draws
    );
    println!(
        "Points A: {:+}  B: {:+}  avg turns: {:.1}",
        summary.team_a_points,
        summary.team_b_points,
        summary.average_turns()
    );
    for (player, counts) in summary.finish_counts.iter().enumerate() {
        println!("  player {} finishes {:?}", player, counts);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("gouji-sim: {} game(s), seed {}", args.games, seed);

    if args.games <= 1 {
        run_single(seed, &args)
    } else {
        run_batch(seed, &args)
    }
}

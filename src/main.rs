//! Duel runner CLI - pits two reference bots against each other.
//!
//! Usage: flash-duel --p1 thug --p2 random --games 100 [--seed 7] [--json]

use clap::Parser;
use serde::Serialize;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flash_duel::bots;
use flash_duel::core::{GameRng, PlayerId};
use flash_duel::duel::{Duel, DuelConfig};
use flash_duel::rules::{Duelist, Ending, GameResult, TimeOverRule};

#[derive(Parser)]
#[command(name = "flash-duel")]
#[command(about = "Run duels between reference bots")]
struct Args {
    /// Number of matches to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Bot in the first seat (thug, random)
    #[arg(long, default_value = "thug")]
    p1: String,

    /// Bot in the second seat (thug, random)
    #[arg(long, default_value = "random")]
    p2: String,

    /// Base seed; every match forks its own seed from it
    #[arg(long)]
    seed: Option<u64>,

    /// Log every turn
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Outcome of one match.
#[derive(Debug, Serialize)]
struct MatchSummary {
    game: u32,
    seed: u64,
    first_player: PlayerId,
    turns: u32,
    result: GameResult,
    ending: String,
}

#[derive(Debug, Default, Serialize)]
struct Tally {
    games: u32,
    p1_wins: u32,
    p2_wins: u32,
    draws: u32,
    forfeits: u32,
    time_overs: u32,
}

impl Tally {
    fn record(&mut self, duel: &Duel) {
        self.games += 1;
        match duel.result() {
            Some(GameResult::Winner(PlayerId::P1)) => self.p1_wins += 1,
            Some(GameResult::Winner(_)) => self.p2_wins += 1,
            Some(GameResult::Draw) | None => self.draws += 1,
        }
        match duel.ending() {
            Some(Ending::Forfeit(_)) => self.forfeits += 1,
            Some(Ending::TimeOver(_)) => self.time_overs += 1,
            None => {}
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    p1: String,
    p2: String,
    tally: Tally,
    matches: Vec<MatchSummary>,
}

fn describe(ending: Option<&Ending>) -> String {
    match ending {
        Some(Ending::Forfeit(err)) => format!("forfeit: {err}"),
        Some(Ending::TimeOver(TimeOverRule::SoleAttacker)) => {
            "time over: only one player could attack".into()
        }
        Some(Ending::TimeOver(TimeOverRule::Furthest)) => "time over: furthest player".into(),
        Some(Ending::TimeOver(TimeOverRule::Draw)) => "time over: draw".into(),
        None => "unfinished".into(),
    }
}

fn create_bot(name: &str, seed: u64) -> Result<Box<dyn Duelist>, Box<dyn std::error::Error>> {
    bots::create(name, seed).ok_or_else(|| {
        format!("Unknown bot: {name} (expected one of: {})", bots::NAMES.join(", ")).into()
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose
    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Fail on a bad name before any match runs
    for name in [&args.p1, &args.p2] {
        create_bot(name, 0)?;
    }

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = GameRng::new(base_seed);
    info!(games = args.games, seed = base_seed, p1 = %args.p1, p2 = %args.p2, "starting");

    let start = Instant::now();
    let mut tally = Tally::default();
    let mut matches = Vec::with_capacity(args.games as usize);

    for game in 1..=args.games {
        let match_rng = rng.fork();
        let p1 = create_bot(&args.p1, match_rng.for_context("p1").seed())?;
        let p2 = create_bot(&args.p2, match_rng.for_context("p2").seed())?;

        let mut duel = Duel::new(DuelConfig::default().with_seed(match_rng.seed()), p1, p2);
        let result = duel.run();
        tally.record(&duel);

        let summary = MatchSummary {
            game,
            seed: match_rng.seed(),
            first_player: duel.first_player(),
            turns: duel.turn(),
            result,
            ending: describe(duel.ending()),
        };
        info!(game, result = ?summary.result, ending = %summary.ending, "match finished");
        matches.push(summary);
    }

    let elapsed = start.elapsed();

    if args.json {
        let report = Report {
            p1: args.p1.clone(),
            p2: args.p2.clone(),
            tally,
            matches,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&args, &tally, &matches, elapsed);
    }

    Ok(())
}

fn print_summary(
    args: &Args,
    tally: &Tally,
    matches: &[MatchSummary],
    elapsed: std::time::Duration,
) {
    println!("\n=== Duel Summary ===");
    println!("p1: {}  p2: {}", args.p1, args.p2);
    println!("Matches played: {}", tally.games);
    println!(
        "p1 wins: {}  p2 wins: {}  draws: {}",
        tally.p1_wins, tally.p2_wins, tally.draws
    );
    println!("Forfeits: {}  Time-overs: {}", tally.forfeits, tally.time_overs);
    println!("Total time: {:?}", elapsed);

    if matches.len() <= 10 {
        for summary in matches {
            let outcome = match summary.result {
                GameResult::Winner(player) => format!("{player} wins"),
                GameResult::Draw => "draw".to_string(),
            };
            println!(
                "  #{:<3} {} after {} turns ({})",
                summary.game, outcome, summary.turns, summary.ending
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bot_by_name() {
        assert_eq!(create_bot("thug", 0).unwrap().name(), "thug");
        assert_eq!(create_bot("random", 1).unwrap().name(), "random");
    }

    #[test]
    fn test_unknown_bot_is_an_error() {
        let err = create_bot("nobody", 0).err().unwrap();
        assert_eq!(err.to_string(), "Unknown bot: nobody (expected one of: thug, random)");
    }

    #[test]
    fn test_args_default_bots() {
        let args = Args::parse_from(["flash-duel"]);
        assert_eq!(args.p1, "thug");
        assert_eq!(args.p2, "random");
        assert_eq!(args.games, 1);
    }
}

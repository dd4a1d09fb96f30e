use std::path::PathBuf;

use blockfall_engine::{EngineSnapshot, GameEngine, Notification, PieceSeed};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of games to play
    #[clap(long, default_value_t = 10)]
    games: usize,
    /// Master seed as 32 hex digits; every game seed is drawn from it (random when omitted)
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Stop a game after this many locked pieces
    #[clap(long, default_value_t = 1000)]
    max_pieces: usize,
    /// Output file (stdout when omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

/// One line of `simulate` output.
///
/// `seed` replays the same piece sequence with `blockfall play --seed`.
#[derive(Debug, Clone, Serialize)]
struct GameReport {
    game: usize,
    seed: PieceSeed,
    last_status: Option<String>,
    final_state: EngineSnapshot,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        games,
        seed,
        max_pieces,
        output,
    } = arg;

    let master_seed = seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Simulating {games} games with master seed {master_seed}");
    let mut rng = Pcg32::from_seed(master_seed.to_bytes());
    let mut output = Output::from_output_path(output.clone())?;

    for game in 0..*games {
        let seed = rng.random();
        let report = play_game(game, seed, *max_pieces, &mut rng);
        eprintln!(
            "Game #{game}: score {}, lines {}, pieces {}",
            report.final_state.stats.score(),
            report.final_state.stats.cleared_lines(),
            report.final_state.stats.completed_pieces(),
        );
        output.write_json_line(&report)?;
    }

    output.finish()
}

/// Plays one game with a random placement policy: rotate a random number
/// of times, shift a random distance, hard drop.
fn play_game<R>(game: usize, seed: PieceSeed, max_pieces: usize, rng: &mut R) -> GameReport
where
    R: Rng + ?Sized,
{
    let mut engine = GameEngine::with_seed(seed);
    let mut last_status = None;
    engine.start();

    while engine.mode().is_running() && engine.stats().completed_pieces() < max_pieces {
        if engine.is_settling() {
            engine.tick();
        } else {
            place_randomly(&mut engine, rng);
        }
        for notification in engine.drain_notifications() {
            if let Notification::StatusMessage(message) = notification {
                last_status = Some(message);
            }
        }
    }

    GameReport {
        game,
        seed,
        last_status,
        final_state: engine.snapshot(),
    }
}

fn place_randomly<R>(engine: &mut GameEngine, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for _ in 0..rng.random_range(0..4) {
        if engine.rotate_right().is_err() {
            break;
        }
    }
    let shift: i32 = rng.random_range(-5..=5);
    for _ in 0..shift.unsigned_abs() {
        let moved = if shift < 0 {
            engine.move_left()
        } else {
            engine.move_right()
        };
        if moved.is_err() {
            break;
        }
    }
    engine.hard_drop();
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: PieceSeed = PieceSeed::from_bytes([5; 16]);

    #[test]
    fn test_game_stops_at_piece_limit() {
        let mut rng = Pcg32::seed_from_u64(1);
        let report = play_game(0, SEED, 5, &mut rng);
        let pieces = report.final_state.stats.completed_pieces();
        assert!(pieces == 5 || report.last_status.as_deref() == Some("Game Over"));
        assert!(pieces <= 5);
    }

    #[test]
    fn test_game_runs_to_game_over() {
        let mut rng = Pcg32::seed_from_u64(2);
        let report = play_game(0, SEED, usize::MAX, &mut rng);
        assert_eq!(report.last_status.as_deref(), Some("Game Over"));
        assert!(report.final_state.mode.is_game_over());
        assert!(report.final_state.active.is_none());
    }

    #[test]
    fn test_same_seeds_same_report() {
        let a = play_game(0, SEED, 200, &mut Pcg32::seed_from_u64(3));
        let b = play_game(0, SEED, 200, &mut Pcg32::seed_from_u64(3));
        assert_eq!(a.final_state, b.final_state);
    }

    #[test]
    fn test_report_serializes_as_one_line() {
        let report = play_game(4, SEED, 3, &mut Pcg32::seed_from_u64(4));
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["game"], 4);
        assert_eq!(value["seed"], SEED.to_string());
        assert_eq!(value["final_state"]["rows"].as_array().unwrap().len(), 22);
    }
}

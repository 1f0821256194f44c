//! Autoplay runner - plays whole rounds headlessly with an engine policy.
//!
//! Each game gets its own seed (`base_seed + game index`) so any single game can be
//! replayed from its report.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::{EntropyRng, RoundController, RoundStats};
use crate::engine::{apply_place, choose_move, Policy};
use crate::types::RoundConfig;

/// Mixed into the policy RNG seed so it does not mirror the piece stream
const POLICY_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Clone, PartialEq)]
pub struct AutoplayConfig {
    pub games: u32,
    pub seed: u64,
    pub policy: Policy,
    pub round: RoundConfig,
    /// Stop a game after this many drops even if moves remain (0 = no limit)
    pub max_moves: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            games: 1,
            seed: 1,
            policy: Policy::Greedy,
            round: RoundConfig::default(),
            max_moves: 0,
        }
    }
}

/// Outcome of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub game: u32,
    pub seed: u64,
    pub policy: &'static str,
    pub score: u32,
    pub lines_cleared: u32,
    pub cells_cleared: u32,
    pub pieces_placed: u32,
    pub refills: u32,
    /// False when the game stopped at `max_moves`
    pub game_over: bool,
    /// Final board, one string per row (`#` filled, `.` empty)
    pub board: Vec<String>,
}

impl GameReport {
    fn new(game: u32, seed: u64, policy: Policy, stats: &RoundStats, game_over: bool, board: Vec<String>) -> Self {
        Self {
            game,
            seed,
            policy: policy.as_str(),
            score: stats.score,
            lines_cleared: stats.lines_cleared,
            cells_cleared: stats.cells_cleared,
            pieces_placed: stats.pieces_placed,
            refills: stats.refills,
            game_over,
            board,
        }
    }
}

/// Totals across games
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub games: u32,
    pub total_score: u64,
    pub best_score: u32,
    pub mean_score: f64,
    pub pieces_placed: u64,
}

impl Summary {
    fn record(&mut self, report: &GameReport) {
        self.games += 1;
        self.total_score += report.score as u64;
        self.best_score = self.best_score.max(report.score);
        self.pieces_placed += report.pieces_placed as u64;
        self.mean_score = self.total_score as f64 / self.games as f64;
    }
}

/// Pick a base seed from OS entropy
pub fn random_seed() -> u64 {
    EntropyRng::from_os().next_u64()
}

/// Play one game to the end (or to `max_moves`)
pub fn play_game(config: &AutoplayConfig, game: u32) -> Result<GameReport> {
    let seed = config.seed.wrapping_add(game as u64);
    let mut round = RoundController::with_rng(config.round, EntropyRng::seeded(seed))
        .context("invalid round configuration")?;
    let mut policy_rng = EntropyRng::seeded(seed ^ POLICY_SEED_SALT);

    let mut moves = 0u32;
    let mut stuck = false;
    while config.max_moves == 0 || moves < config.max_moves {
        let Some(mv) = choose_move(config.policy, &round, &mut policy_rng) else {
            // Only the opening tray is dealt without a move check
            if !round.is_game_over() {
                debug!(game, "opening tray has no legal move");
            }
            stuck = true;
            break;
        };

        let result = apply_place(&mut round, mv.slot, mv.anchor.row, mv.anchor.col)
            .with_context(|| format!("game {}: move {} ({:?}) rejected", game, moves, mv))?;
        moves += 1;

        if result.points_earned > 0 {
            debug!(game, moves, points = result.points_earned, "line clear");
        }
        if result.no_more_moves {
            break;
        }
    }

    let report = GameReport::new(
        game,
        seed,
        config.policy,
        round.stats(),
        round.is_game_over() || stuck,
        round.board().to_ascii(),
    );
    info!(
        game,
        seed,
        score = report.score,
        pieces = report.pieces_placed,
        lines = report.lines_cleared,
        game_over = report.game_over,
        "game finished"
    );
    Ok(report)
}

/// Play `config.games` games, handing each report to `on_report`
pub fn run(config: &AutoplayConfig, mut on_report: impl FnMut(&GameReport) -> Result<()>) -> Result<Summary> {
    config.round.validate().context("invalid round configuration")?;

    let mut summary = Summary::default();
    for game in 0..config.games {
        let report = play_game(config, game)?;
        on_report(&report)?;
        summary.record(&report);
    }
    Ok(summary)
}

//! Headless autoplay runner (default binary).
//!
//! Plays whole rounds with an engine policy and prints per-game results. Logs go to
//! stderr so `--json` output on stdout stays machine-readable.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use torus_blocks::autoplay::{self, AutoplayConfig, GameReport};
use torus_blocks::engine::Policy;
use torus_blocks::types::{RoundConfig, BOARD_DIM};

#[derive(Debug, Parser)]
#[command(name = "torus-blocks", version, about = "Autoplay the toroidal block puzzle")]
struct Cli {
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,

    #[arg(long, env = "TORUS_BLOCKS_GAMES", default_value_t = 1, help = "Number of games to play")]
    games: u32,

    #[arg(long, env = "TORUS_BLOCKS_SEED", help = "Base seed; game i uses seed + i (random if unset)")]
    seed: Option<u64>,

    #[arg(long, env = "TORUS_BLOCKS_POLICY", default_value = "greedy", value_parser = parse_policy, help = "Move policy: first, random or greedy")]
    policy: Policy,

    #[arg(long, env = "TORUS_BLOCKS_BOARD_DIM", default_value_t = BOARD_DIM, help = "Board side length in cells")]
    board_dim: u8,

    #[arg(long, env = "TORUS_BLOCKS_MAX_MOVES", default_value_t = 0, help = "Stop each game after this many drops (0 = play to game over)")]
    max_moves: u32,

    #[arg(long, env = "TORUS_BLOCKS_TOUCH", help = "Use the touch layout (dragged pieces float above the pointer)")]
    touch: bool,

    #[arg(long, env = "TORUS_BLOCKS_JSON", help = "Print one JSON report per game on stdout")]
    json: bool,
}

fn parse_policy(s: &str) -> Result<Policy, String> {
    Policy::from_str(s).ok_or_else(|| format!("unknown policy '{}' (expected first, random or greedy)", s))
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn autoplay_config(&self) -> AutoplayConfig {
        let round = if self.touch {
            RoundConfig::touch()
        } else {
            RoundConfig::default()
        };
        AutoplayConfig {
            games: self.games,
            seed: self.seed.unwrap_or_else(autoplay::random_seed),
            policy: self.policy,
            round: RoundConfig {
                board_dim: self.board_dim,
                ..round
            },
            max_moves: self.max_moves,
        }
    }
}

fn print_report(out: &mut impl Write, report: &GameReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, report).context("failed to encode game report")?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(
        out,
        "game {:>3}  seed {:<20} score {:>6}  pieces {:>5}  lines {:>4}{}",
        report.game,
        report.seed,
        report.score,
        report.pieces_placed,
        report.lines_cleared,
        if report.game_over { "" } else { "  (stopped)" }
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(cli.log_level()))
        .init();

    let config = cli.autoplay_config();
    info!(
        games = config.games,
        seed = config.seed,
        policy = config.policy.as_str(),
        board_dim = config.round.board_dim,
        "starting autoplay"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = autoplay::run(&config, |report| print_report(&mut out, report, cli.json))?;

    if !cli.json {
        writeln!(
            out,
            "{} games  best {}  mean {:.1}  pieces {}",
            summary.games, summary.best_score, summary.mean_score, summary.pieces_placed
        )?;
    }
    info!(
        games = summary.games,
        best = summary.best_score,
        mean = summary.mean_score,
        "autoplay finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["torus-blocks", "--seed", "7"]).unwrap();
        let config = cli.autoplay_config();
        assert_eq!(config.seed, 7);
        assert_eq!(config.games, 1);
        assert_eq!(config.policy, Policy::Greedy);
        assert_eq!(config.round, RoundConfig::default());
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "torus-blocks",
            "-vv",
            "--seed",
            "3",
            "--games",
            "4",
            "--policy",
            "random",
            "--board-dim",
            "8",
            "--touch",
        ])
        .unwrap();
        let config = cli.autoplay_config();
        assert_eq!(config.games, 4);
        assert_eq!(config.policy, Policy::Random);
        assert_eq!(config.round.board_dim, 8);
        assert_eq!(config.round.finger_offset, RoundConfig::touch().finger_offset);
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_cli_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["torus-blocks", "--policy", "best"]).is_err());
    }

    #[test]
    fn test_print_report_json_line() {
        let config = AutoplayConfig {
            max_moves: 1,
            ..AutoplayConfig::default()
        };
        let report = autoplay::play_game(&config, 0).unwrap();
        let mut buf = Vec::new();
        print_report(&mut buf, &report, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["game"], 0);
    }
}

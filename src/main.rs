//! Terminal harness for playing against the engine
//!
//! Enter moves as `row col` (0-based). `restart` starts a new game and
//! `quit` exits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use gomoku::{AIEngine, EngineConfig, Game, Pos};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Play five-in-a-row against the computer on a 15x15 board")]
struct Args {
    /// TOML file with engine settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies (overrides the config file)
    #[arg(long)]
    depth: Option<u8>,

    /// Seed for the random fallback move
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long = "delay-ms")]
    delay_ms: Option<u64>,

    /// Log engine activity to stderr (-v for game events, -vv for search details)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Route the library's `log` records to stderr.
fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

enum Command {
    Play(Pos),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    match line {
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "restart" | "r" => return Ok(Command::Restart),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        anyhow::bail!("expected `row col`, got `{line}`");
    };
    let row: usize = row.parse().with_context(|| format!("invalid row `{row}`"))?;
    let col: usize = col.parse().with_context(|| format!("invalid column `{col}`"))?;
    Ok(Command::Play(Pos::try_new(row, col)?))
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_think_delay_ms(delay_ms);
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = build_config(&args)?;
    let delay = config.think_delay();
    let mut engine = AIEngine::with_config(config)?;
    let mut game = Game::new();

    println!("Five in a row: you are X, the computer is O.");
    println!("Enter `row col` to play, `restart` or `quit`.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", game.board());
        println!("{}", game.status());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match parse_command(&line?) {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };

        let pos = match command {
            Command::Quit => break,
            Command::Restart => {
                game.restart();
                continue;
            }
            Command::Play(pos) => pos,
        };

        if let Err(err) = game.apply_human_move(pos) {
            println!("{err}");
            continue;
        }
        if game.outcome().is_over() {
            continue;
        }

        println!("{}", game.status());
        thread::sleep(delay);
        let result = game
            .apply_computer_move(&mut engine)
            .context("computer failed to move")?;
        println!(
            "Computer plays {} (score {}, {} nodes, {}ms)",
            result.best_move, result.score, result.nodes, result.time_ms
        );
    }

    Ok(())
}

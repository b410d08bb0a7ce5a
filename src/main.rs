//! # Mazecrawl Main Entry Point
//!
//! Builds a session from the command line, then plays it either from a
//! script of key names or line by line from stdin, printing a frame after
//! every action.

use clap::Parser;
use log::{error, info};
use mazecrawl::{
    CrawlerError, CrawlerResult, GameState, GenerationConfig, InputHandler, PlayerInput,
    TextDisplay,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP_TEXT: &str = "Keys: w/a/s/d or up/down/left/right move, space attacks, \
i opens the inventory (w/s select, e equips), q quits";

/// Command line arguments for Mazecrawl.
#[derive(Parser, Debug)]
#[command(name = "mazecrawl")]
#[command(about = "A turn-based maze dungeon crawler")]
#[command(version)]
struct Args {
    /// Random seed for level generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Side length of the square play area
    #[arg(short, long)]
    map_size: Option<u32>,

    /// JSON generation config; --seed and --map-size override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Key names to play, e.g. "right right down space"; reads stdin when absent
    #[arg(long)]
    script: Option<String>,

    /// Print snapshots as JSON lines instead of text frames
    #[arg(long)]
    json: bool,

    /// Disable h/j/k/l movement keys
    #[arg(long)]
    no_vi_keys: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
            .with_target(false)
            .with_writer(io::stderr)
            .init();
        tracing::debug!("tracing subscriber installed");
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_timestamp(None)
            .init();
    }
}

fn load_config(args: &Args) -> CrawlerResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GenerationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(map_size) = args.map_size {
        config.map_size = map_size;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> CrawlerResult<()> {
    let config = load_config(args)?;
    info!("Starting Mazecrawl v{} with seed {}", mazecrawl::VERSION, config.seed);

    let mut game_state = GameState::new(config)?;
    let input_handler = InputHandler {
        vi_keys_enabled: !args.no_vi_keys,
    };
    let display = TextDisplay::new();

    emit_frame(&mut game_state, &display, args.json)?;

    match &args.script {
        Some(script) => {
            for input in input_handler.parse_script(script)? {
                if !step(&mut game_state, &input_handler, input)? {
                    break;
                }
                emit_frame(&mut game_state, &display, args.json)?;
                if game_state.is_game_ended() {
                    break;
                }
            }
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                let mut keep_going = true;
                for token in line.split_whitespace() {
                    match input_handler.parse_key(token) {
                        Some(input) => {
                            keep_going = step(&mut game_state, &input_handler, input)?
                                && !game_state.is_game_ended();
                            if !keep_going {
                                break;
                            }
                        }
                        None => println!("Unknown key '{}'. {}", token, HELP_TEXT),
                    }
                }
                emit_frame(&mut game_state, &display, args.json)?;
                if !keep_going {
                    break;
                }
            }
        }
    }

    let stats = &game_state.statistics;
    info!(
        "Session ended on level {} after {} turns: {} enemies defeated, {} chests opened",
        game_state.level_number(),
        stats.turns,
        stats.enemies_defeated,
        stats.chests_opened
    );
    Ok(())
}

/// Feeds one input to the game. Returns false when the player quits or the
/// session no longer accepts actions.
fn step(
    game_state: &mut GameState,
    input_handler: &InputHandler,
    input: PlayerInput,
) -> CrawlerResult<bool> {
    match input {
        PlayerInput::Quit => {
            info!("Player quit the game");
            return Ok(false);
        }
        PlayerInput::Help => {
            println!("{}", HELP_TEXT);
            return Ok(true);
        }
        _ => {}
    }

    let Some(action) = input_handler.action_for(input, game_state) else {
        return Ok(true);
    };
    match game_state.apply_player_action(action) {
        Ok(_) => Ok(true),
        Err(CrawlerError::SessionOver) => Ok(false),
        Err(e) => Err(e),
    }
}

fn emit_frame(
    game_state: &mut GameState,
    display: &TextDisplay,
    json: bool,
) -> CrawlerResult<()> {
    let snapshot = game_state.snapshot();
    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", snapshot.to_json()?)?;
    } else {
        writeln!(stdout, "{}", display.render(&snapshot))?;
    }
    game_state.tick();
    Ok(())
}

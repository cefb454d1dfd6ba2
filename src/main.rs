//! Wordle - CLI
//!
//! Play Wordle in a TUI or a line-based prompt, or use the engine pieces
//! (evaluation, validity checks, word resolution) directly.

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;
use wordle_engine::{
    commands::{check_word, evaluate_guess, run_simple},
    core::GameConfig,
    game::Game,
    net::{EngineConfig, Fetcher, HttpFetcher, Offline},
    output::{print_check_result, print_evaluation},
    services::{Validator, WordSource},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle puzzle engine with remote word providers and a local fallback list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Local word list: 'builtin' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Never contact the remote providers
    #[arg(long, global = true)]
    offline: bool,

    /// Per-request timeout for remote providers, in milliseconds
    #[arg(long, global = true, default_value = "5000")]
    timeout_ms: u64,

    /// Number of attempts
    #[arg(long, global = true, default_value = "6")]
    rows: usize,

    /// Word length
    #[arg(long, global = true, default_value = "5")]
    cols: usize,

    /// Seed for the local word choice (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against a target word
    Evaluate {
        /// The guessed word
        guess: String,

        /// The word to score against
        target: String,
    },

    /// Check whether a word would be accepted as a guess
    Check {
        /// Word to check
        word: String,
    },

    /// Resolve one puzzle word through the provider chain
    Word,
}

/// Shared setup derived from the global flags
struct Context {
    fetcher: Arc<dyn Fetcher>,
    words: Arc<WordList>,
    engine: EngineConfig,
    config: GameConfig,
    seed: Option<u64>,
}

impl Context {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let engine = EngineConfig {
            timeout: Duration::from_millis(cli.timeout_ms),
            ..EngineConfig::default()
        };

        let fetcher: Arc<dyn Fetcher> = if cli.offline {
            Arc::new(Offline)
        } else {
            Arc::new(HttpFetcher::new(engine.timeout)?)
        };

        Ok(Self {
            fetcher,
            words: Arc::new(load_wordlist(&cli.wordlist)?),
            engine,
            config: GameConfig::new(cli.rows, cli.cols),
            seed: cli.seed,
        })
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    async fn start_game(&self) -> Game<dyn Fetcher, StdRng> {
        Game::start(
            Arc::clone(&self.fetcher),
            Arc::clone(&self.words),
            &self.engine,
            self.config,
            self.rng(),
        )
        .await
    }
}

/// Load the local word list based on the -w flag
fn load_wordlist(mode: &str) -> Result<WordList> {
    match mode {
        "builtin" => Ok(WordList::builtin()),
        path => Ok(load_from_file(path)?),
    }
}

fn init_logging(command: &Commands) {
    // The TUI owns the terminal, so stay silent there unless asked
    let default = match command {
        Commands::Play => "off",
        _ => "warn",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(&command);

    match command {
        Commands::Evaluate { guess, target } => run_evaluate_command(&guess, &target),
        Commands::Play => run_play_command(&Context::from_cli(&cli)?, &runtime()?),
        Commands::Simple => runtime()?.block_on(run_simple_command(&Context::from_cli(&cli)?)),
        Commands::Check { word } => {
            runtime()?.block_on(run_check_command(&Context::from_cli(&cli)?, &word))
        }
        Commands::Word => runtime()?.block_on(run_word_command(&Context::from_cli(&cli)?)),
    }
}

/// Engine calls run on a single-threaded runtime driven from the main thread
fn runtime() -> Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn run_evaluate_command(guess: &str, target: &str) -> Result<()> {
    let result = evaluate_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_evaluation(&result);
    Ok(())
}

async fn run_check_command(ctx: &Context, word: &str) -> Result<()> {
    let validator = Validator::new(Arc::clone(&ctx.fetcher), Arc::clone(&ctx.words), &ctx.engine);

    let pb = spinner(&format!("Checking {}...", word.to_uppercase()))?;
    let result = check_word(&validator, &ctx.words, word).await;
    pb.finish_and_clear();

    print_check_result(&result);
    Ok(())
}

async fn run_word_command(ctx: &Context) -> Result<()> {
    let source = WordSource::new(Arc::clone(&ctx.fetcher), Arc::clone(&ctx.words), &ctx.engine);
    let mut rng = ctx.rng();

    let pb = spinner("Resolving word...")?;
    let word = source.resolve_word(ctx.config.cols(), &mut rng).await;
    pb.finish_and_clear();

    println!("{word}");
    Ok(())
}

async fn run_simple_command(ctx: &Context) -> Result<()> {
    let pb = spinner("Choosing a word...")?;
    let mut game = ctx.start_game().await;
    pb.finish_and_clear();

    run_simple(&mut game).await.map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(ctx: &Context, runtime: &Runtime) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let pb = spinner("Choosing a word...")?;
    let game = runtime.block_on(ctx.start_game());
    pb.finish_and_clear();

    run_tui(App::new(game), runtime)
}

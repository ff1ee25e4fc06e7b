//! CLI driver (C13, §4.14): one subcommand, `battle`, that wires two
//! preconfigured parties through the turn loop and runs it to completion.
//!
//! Grounded on `mingu600-tapu-simu`'s `clap::Parser`-derived `Cli`/`Commands`
//! shape (`src/io.rs`/`src/main.rs`: a `#[command(subcommand)]` enum matched
//! in `main`), narrowed to the one subcommand SPEC_FULL names; the teacher's
//! own `crates/test_runner` binary is a `cargo test` wrapper with no
//! subcommand structure, so its shape contributes the workspace-member-
//! binary-crate layout only, not the argument parsing itself.

use clap::{Parser, Subcommand};
use poke_engine::config::{EngineConfig, Environment};
use poke_engine::logger::{Logger, TracingLogger};
use poke_engine::party::{InputProvider, Party};
use poke_engine::random::DefaultRandomSource;
use poke_engine::template::{DefaultCatalogProvider, HttpTemplateProvider, TemplateProvider};
use poke_engine::{Battle, EngineError, Field};

#[derive(Parser)]
#[command(name = "poke-cli")]
#[command(about = "Runs a single deterministic battle between two preconfigured parties")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one battle between two template ids, logging every turn to stdout.
    Battle {
        /// Template id for side A (e.g. "charizard").
        #[arg(long)]
        side_a: String,

        /// Template id for side B (e.g. "blastoise").
        #[arg(long)]
        side_b: String,

        /// Which backing catalog to load templates from. Omit for the
        /// in-process default catalog; pass a value to use the HTTP provider.
        #[arg(long, value_enum)]
        environment: Option<CliEnvironment>,

        /// Game generation driving priority overrides and crit multiplier.
        #[arg(long, default_value_t = 9)]
        generation: u8,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliEnvironment {
    Production,
    Staging,
    Development,
}

impl From<CliEnvironment> for Environment {
    fn from(value: CliEnvironment) -> Self {
        match value {
            CliEnvironment::Production => Environment::Production,
            CliEnvironment::Staging => Environment::Staging,
            CliEnvironment::Development => Environment::Development,
        }
    }
}

/// A non-interactive input provider: always selects the first move in the
/// active creature's move list, §4.14's "sufficient for a non-interactive
/// demo".
fn first_move_provider() -> InputProvider {
    Box::new(|| Box::pin(async { poke_engine::events::UserEvent::SelectMove(0) }))
}

async fn load_party(
    provider: &dyn TemplateProvider,
    owner: &str,
    template_id: &str,
) -> Result<Party, EngineError> {
    let template = provider
        .config_by_id(template_id)
        .await?
        .ok_or_else(|| EngineError::TemplateUnavailable(template_id.to_string()))?;
    let creature = template.instantiate();
    Ok(Party::new(owner, vec![creature], first_move_provider()))
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let Commands::Battle { side_a, side_b, environment, generation } = cli.command;

    let mut config = EngineConfig::from_env();
    if let Some(env) = environment {
        config.environment = env.into();
    }

    let result = run_battle(&side_a, &side_b, environment.is_some(), config, generation).await;
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("battle setup failed: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run_battle(
    side_a_id: &str,
    side_b_id: &str,
    use_http: bool,
    config: EngineConfig,
    generation: u8,
) -> Result<(), EngineError> {
    let provider: Box<dyn TemplateProvider> = if use_http {
        Box::new(HttpTemplateProvider::new(&config))
    } else {
        Box::new(DefaultCatalogProvider::new())
    };

    let party_a = load_party(provider.as_ref(), "Side A", side_a_id).await?;
    let party_b = load_party(provider.as_ref(), "Side B", side_b_id).await?;

    let logger = TracingLogger;
    let mut battle = Battle::new(party_a, party_b, Field::new(), generation, DefaultRandomSource);
    let winner = battle.run_to_completion(&logger).await;
    logger.log(&format!("Battle over. Winner: {winner:?}"));

    Ok(())
}

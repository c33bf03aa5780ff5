//! Binary entrypoint for the swipe deck.
//!
//! Loads the catalog, then wires stdin gestures, the recommendations watcher
//! and the terminal viewer around a single deck-owning task.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use swipe_deck::catalog;
use swipe_deck::config::Configuration;
use swipe_deck::environment::ApiEndpoints;
use swipe_deck::events::{DeckCommand, ViewerEvent};
use swipe_deck::profile::Profile;
use swipe_deck::tasks;
use swipe_deck::WindowedCircularDeck;

#[derive(Debug, Parser)]
#[command(name = "swipe-deck", version, about = "Swipe through recommended profiles")]
struct Cli {
    /// Path to YAML config file (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the startup catalog file
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Override the watched recommendations file
    #[arg(long, value_name = "FILE")]
    recommendations: Option<PathBuf>,

    /// Override the number of stacked cards
    #[arg(long, value_name = "N")]
    window_size: Option<NonZeroUsize>,

    /// Host the widget is served from (selects the API environment)
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("swipe_deck={level}").parse()?)
        .add_directive("notify=warn".parse()?);
    // Logs go to stderr so they never interleave with the card stack on stdout.
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Configuration> {
    let mut cfg = match &cli.config {
        Some(path) => Configuration::from_yaml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Configuration::default(),
    };
    if let Some(path) = &cli.catalog {
        cfg.catalog_path = path.clone();
    }
    if let Some(path) = &cli.recommendations {
        cfg.recommendations_path = Some(path.clone());
    }
    if let Some(n) = cli.window_size {
        cfg.window_size = n;
    }
    if let Some(host) = &cli.host {
        cfg.host = host.clone();
    }
    cfg.validated().context("validating configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = load_config(&cli)?;
    info!(?cfg, "configuration loaded");

    let endpoints = ApiEndpoints::for_host(&cfg.api, &cfg.host);
    info!(
        environment = %endpoints.environment,
        base_url = %endpoints.base_url,
        options = %endpoints.options,
        generate_question = %endpoints.generate_question,
        recommend = %endpoints.recommend,
        health = %endpoints.health,
        "api endpoints"
    );

    let profiles: Vec<Profile> = catalog::load_file(&cfg.catalog_path)
        .with_context(|| format!("reading catalog {}", cfg.catalog_path.display()))?;
    let deck = WindowedCircularDeck::load(profiles, cfg.window_size)
        .with_context(|| format!("catalog {} is unusable", cfg.catalog_path.display()))?;
    info!(
        count = deck.len(),
        window = deck.occupancy(),
        "catalog loaded"
    );

    // Channels (small/bounded)
    let (cmd_tx, cmd_rx) = mpsc::channel::<DeckCommand>(32); // Input/Recommendations -> Deck
    let (view_tx, view_rx) = mpsc::channel::<ViewerEvent>(8); // Deck -> Viewer

    let cancel = CancellationToken::new();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!("ctrl-c handler failed: {err}");
                return;
            }
            info!("ctrl-c received; initiating shutdown");
            cancel.cancel();
        });
    }

    let mut tasks = JoinSet::new();

    // Deck owner
    tasks.spawn({
        let cancel = cancel.clone();
        async move {
            tasks::deck::run(deck, cmd_rx, view_tx, cancel)
                .await
                .context("deck task failed")
        }
    });

    // Viewer
    tasks.spawn(async move {
        tasks::viewer::run(view_rx, std::io::stdout())
            .await
            .context("viewer task failed")
    });

    // Recommendations hot-swap
    if let Some(path) = cfg.recommendations_path.clone() {
        tasks.spawn({
            let to_deck = cmd_tx.clone();
            let cancel = cancel.clone();
            let debounce = cfg.reload_debounce;
            async move {
                tasks::recommendations::run(path, debounce, to_deck, cancel)
                    .await
                    .context("recommendations task failed")
            }
        });
    }

    // Gestures from stdin
    tasks.spawn({
        let to_deck = cmd_tx;
        let cancel = cancel.clone();
        async move {
            let lines = tasks::input::spawn_stdin_reader();
            tasks::input::run(lines, to_deck, cancel)
                .await
                .context("input task failed")
        }
    });

    // Drain JoinSet; a failing task takes the others down with it.
    while let Some(res) = tasks.join_next().await {
        match res {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!("task error: {e:?}");
                cancel.cancel();
            }
            Err(e) => {
                tracing::error!("join error: {e}");
                cancel.cancel();
            }
        }
    }

    Ok(())
}

//! CLI entrypoint for localchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use localchat_application::{ChatController, NoRenderSink, RenderSink, SubmitOutcome};
use localchat_domain::ServiceProtocol;
use localchat_infrastructure::{ConfigLoader, FileConfig, build_exchange};
use localchat_presentation::{ChatRepl, Cli, TerminalSurface, TranscriptFormatter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    info!(
        "Starting localchat ({} at {})",
        config.service.protocol,
        config.service.resolved_endpoint()
    );

    // === Dependency Injection ===
    let exchange = build_exchange(&config.service).context("Failed to set up chat service")?;
    let behavior = config.chat.to_behavior();

    // One-shot mode
    if let Some(message) = cli.message.as_deref() {
        let sink: Arc<dyn RenderSink> = if cli.json {
            Arc::new(NoRenderSink)
        } else {
            Arc::new(TerminalSurface::new().with_progress(!cli.quiet && config.repl.show_progress))
        };
        let mut controller = ChatController::new(exchange, sink).with_behavior(behavior);
        controller.set_input(message);
        let outcome = controller.submit().await;

        if cli.json {
            println!("{}", TranscriptFormatter::json(controller.conversation()));
        }
        if outcome == SubmitOutcome::Failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Chat mode
    let surface = Arc::new(
        TerminalSurface::new().with_progress(!cli.quiet && config.repl.show_progress),
    );
    let controller = ChatController::new(exchange, surface).with_behavior(behavior);
    let repl = ChatRepl::new(controller)
        .with_service(describe_service(&config))
        .with_history_path(config.repl.history_path());

    repl.run().await?;
    Ok(())
}

/// Command-line flags take precedence over every config file.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(protocol) = cli.protocol {
        config.service.protocol = protocol;
    }
    if let Some(ref endpoint) = cli.endpoint {
        config.service.endpoint = Some(endpoint.clone());
    }
    if let Some(ref model) = cli.model {
        config.service.model = model.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.service.timeout_seconds = Some(timeout);
    }
}

fn describe_service(config: &FileConfig) -> String {
    let endpoint = config.service.resolved_endpoint();
    match config.service.protocol {
        ServiceProtocol::Relay => format!("relay at {}", endpoint),
        ServiceProtocol::Ollama => format!("ollama ({}) at {}", config.service.model, endpoint),
    }
}

//! # NIETBot — Student Handbook FAQ Bot
//!
//! Usage:
//!   nietbot                              # Start the chat API (default port 5023)
//!   nietbot serve --port 8080            # Custom port
//!   nietbot ask "What is the bus fee?"   # One-shot answer
//!   nietbot intents                      # Intent vocabulary and example counts
//!   nietbot check                        # Validate config, corpus and handbook

use anyhow::Result;
use clap::{Parser, Subcommand};
use nietbot_agent::Agent;
use nietbot_core::{IntentLabel, NietBotConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nietbot",
    version,
    about = "🎓 NIETBot — Student Handbook FAQ Bot"
)]
struct Cli {
    /// Config file (default: $NIETBOT_CONFIG or ~/.nietbot/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (includes per-question match diagnostics)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP chat API
    Serve {
        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen host
        #[arg(long)]
        host: Option<String>,
    },
    /// Answer a single question and exit
    Ask {
        /// The question
        question: Vec<String>,

        /// Print the full JSON result
        #[arg(long)]
        json: bool,
    },
    /// List intents and how many training examples each has
    Intents,
    /// Validate config, corpus and handbook
    Check,
}

fn load_config(path: Option<&PathBuf>) -> Result<NietBotConfig> {
    let config = match path {
        Some(p) => NietBotConfig::load_from(p)?,
        None => NietBotConfig::load()?,
    };
    tracing::debug!(?config, "config loaded");
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "nietbot=debug,tower_http=debug"
    } else {
        "nietbot=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    let mut config = load_config(cli.config.as_ref())?;

    match cli.command.unwrap_or(Command::Serve { port: None, host: None }) {
        Command::Serve { port, host } => {
            if let Some(port) = port {
                config.gateway.port = port;
            }
            if let Some(host) = host {
                config.gateway.host = host;
            }
            config.validate()?;

            let agent = Arc::new(Agent::new(&config)?);

            println!("🎓 NIETBot v{}", env!("CARGO_PKG_VERSION"));
            println!("   🌐 Chat API:  http://{}:{}/chat", config.gateway.host, config.gateway.port);
            println!("   📚 Examples:  {}", agent.example_count());
            println!("   🎯 Threshold: {:.2}", config.matcher.threshold);
            println!();

            nietbot_gateway::start(&config.gateway, agent).await?;
        }
        Command::Ask { question, json } => {
            let agent = Agent::new(&config)?;
            let question = question.join(" ");
            let result = agent.process_chat(&question);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("[{}]", result.predicted_intent);
                println!("{}", result.answer);
                for option in &result.options {
                    println!("  → {option}");
                }
            }
        }
        Command::Intents => {
            let agent = Agent::new(&config)?;
            let counts = agent.corpus().intent_counts();
            for label in IntentLabel::ALL {
                let n = counts.get(&label).copied().unwrap_or(0);
                println!("{:<24} {n:>3} example(s)", label.as_str());
            }
        }
        Command::Check => {
            let agent = Agent::new(&config)?;
            let known = agent.detector().intents();
            let missing: Vec<&str> = IntentLabel::ALL
                .iter()
                .filter(|l| **l != IntentLabel::GeneralQuery)
                .filter(|l| !known.contains(*l))
                .map(|l| l.as_str())
                .collect();
            println!("✅ Config OK (threshold {:.2})", config.matcher.threshold);
            println!("✅ Corpus OK: {} examples", agent.example_count());
            println!("✅ Handbook OK: {}", config.data.handbook_path().display());
            if !missing.is_empty() {
                println!("⚠️  No training examples for: {}", missing.join(", "));
            }
        }
    }

    Ok(())
}

mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction, MedAction};
use std::process;
use tracing_subscriber::EnvFilter;

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Med { .. } => "med",
        Commands::Interactions { .. } => "interactions",
        Commands::Dosage { .. } => "dosage",
        Commands::Alternatives { .. } => "alternatives",
        Commands::Analyze { .. } => "analyze",
        Commands::Extract { .. } => "extract",
        Commands::Config { .. } => "config",
        Commands::Completions { .. } => "completions",
    }
}

fn main() {
    // stdout carries JSON, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RXCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let name = command_name(&cli.command);

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Med { action } => match action {
            MedAction::Add { name, dose, freq } => {
                cmd::med::run_add(&name, dose.as_deref(), freq.as_deref(), cli.human)
            }
            MedAction::List => cmd::med::run_list(cli.human),
            MedAction::Remove { name } => cmd::med::run_remove(&name, cli.human),
            MedAction::Clear => cmd::med::run_clear(cli.human),
        },
        Commands::Interactions { profile } => cmd::analyze::run_interactions(&profile, cli.human),
        Commands::Dosage { profile } => cmd::analyze::run_dosage(&profile, cli.human),
        Commands::Alternatives { profile } => cmd::analyze::run_alternatives(&profile, cli.human),
        Commands::Analyze { profile } => cmd::analyze::run_analyze(&profile, cli.human),
        Commands::Extract { text, add } => cmd::extract::run(text.as_deref(), add, cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "rxcheck", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(command = name, error = %e, "Command failed");
        let err = rxcheck::output::error(name, "general_error", &e.to_string());
        eprintln!("{err}");
        process::exit(1);
    }
}

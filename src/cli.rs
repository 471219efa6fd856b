use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rxcheck",
    version,
    about = "Check a medication list for interactions, dosage and overdose"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,
}

/// Where the patient profile for an analysis comes from.
#[derive(Args, Clone)]
pub struct ProfileArgs {
    /// Patient profile JSON file ("-" for stdin) instead of the stored list
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Patient age in years (overrides the configured birth year)
    #[arg(long)]
    pub age: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and medication store
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Manage the stored medication list
    Med {
        #[command(subcommand)]
        action: MedAction,
    },

    /// Report known interactions between drug pairs
    Interactions {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Recommend age-appropriate dosages
    Dosage {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Suggest alternative medications
    Alternatives {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Run every check and print a combined report
    Analyze {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Extract drug mentions from prescription text
    Extract {
        /// Text to scan ("-" or omitted reads stdin)
        text: Option<String>,

        /// Store the extracted drugs in the medication list
        #[arg(long)]
        add: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum MedAction {
    /// Add a drug, or update the dosage of one already stored
    Add {
        /// Drug name
        name: String,

        /// Dosage text, e.g. "500mg"
        #[arg(long)]
        dose: Option<String>,

        /// Frequency text, e.g. "every 6 hours"
        #[arg(long)]
        freq: Option<String>,
    },
    /// List stored drugs
    List,
    /// Remove a stored drug
    Remove {
        /// Drug name
        name: String,
    },
    /// Remove every stored drug
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (birth_year, conditions, knowledge.path)
        key: String,
        /// Config value
        value: String,
    },
}

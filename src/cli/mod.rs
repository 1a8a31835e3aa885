pub mod completions;
pub mod eval;
pub mod generate;
pub mod init;
pub mod noise;
pub mod show;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::art::Grammar;
use crate::config::ArtConfig;
use crate::error::Result;

/// artgen - Random expression art generator
#[derive(Parser, Debug)]
#[command(name = "artgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an image from three random expression trees
    Generate(generate::GenerateArgs),

    /// Generate a test image of random pixels
    Noise(noise::NoiseArgs),

    /// Print the channel trees a seed produces
    Show(show::ShowArgs),

    /// Evaluate an expression tree at a point
    Eval(eval::EvalArgs),

    /// Write a default artgen.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Tree-building options shared by `generate` and `show`.
///
/// Flags override values from the config file.
#[derive(Args, Debug, Default)]
pub struct TreeArgs {
    /// Config file (default: ./artgen.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lower bound on subtree depth budgets
    #[arg(long, allow_negative_numbers = true)]
    pub min_depth: Option<i32>,

    /// Upper bound on tree depth
    #[arg(long, allow_negative_numbers = true)]
    pub max_depth: Option<i32>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// How squared and cubed nodes are grown
    #[arg(long, value_enum)]
    pub grammar: Option<Grammar>,
}

impl TreeArgs {
    /// Load the config file and apply flag overrides.
    pub fn resolve(&self) -> Result<ArtConfig> {
        let cwd = std::env::current_dir()?;
        let mut config = ArtConfig::discover(self.config.as_deref(), &cwd)?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut ArtConfig) {
        if let Some(min_depth) = self.min_depth {
            config.min_depth = min_depth;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(grammar) = self.grammar {
            config.grammar = grammar;
        }
    }
}

/// The configured seed, or a fresh one so the run can be repeated.
pub(crate) fn effective_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

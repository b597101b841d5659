//! Command-line interface for the kindred recommender.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_USER_ID: &str = "user-id";
pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_TOP_N: &str = "top-n";
pub(crate) const ARG_K_NEIGHBORS: &str = "k-neighbors";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_USER_ID: &str = "KINDRED_CMDS_RECOMMEND_USER_ID";

/// Run the kindred CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering,
/// dataset loading or the recommendation pipeline fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "kindred",
    about = "User-based collaborative filtering over the MovieLens 100K dataset",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend items for a target user from their nearest neighbours.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;

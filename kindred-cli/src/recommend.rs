//! Recommend command implementation for the kindred CLI.

use std::collections::BTreeMap;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use kindred_core::{ItemId, UserId, UserItemMatrix};
use kindred_data::{ITEMS_FILE, RATINGS_FILE, load_dataset};
use kindred_scorer::{DEFAULT_K_NEIGHBORS, DEFAULT_TOP_N, recommend};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATA_DIR, ARG_K_NEIGHBORS, ARG_OUTPUT, ARG_TOP_N, ARG_USER_ID, CliError, ENV_USER_ID,
};

/// Default dataset directory relative to the working directory.
const DEFAULT_DATA_DIR: &str = "data/ml-100k";

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend items for a target user by aggregating the \
                 ratings of their most similar users. Options can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Recommend items for a target user"
)]
#[ortho_config(prefix = "KINDRED")]
pub(crate) struct RecommendArgs {
    /// Target user id from the ratings dataset.
    #[arg(value_name = "user-id")]
    #[serde(default)]
    pub(crate) user_id: Option<UserId>,
    /// Directory holding the extracted dataset (`u.data`, `u.item`).
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Number of recommendations to return.
    #[arg(long = ARG_TOP_N, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Number of nearest neighbours to aggregate.
    #[arg(long = ARG_K_NEIGHBORS, value_name = "count")]
    #[serde(default)]
    pub(crate) k_neighbors: Option<usize>,
    /// Optional path for a pretty-printed JSON results file.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Target user id.
    pub(crate) user_id: UserId,
    /// Dataset directory.
    pub(crate) data_dir: Utf8PathBuf,
    /// Number of recommendations to return.
    pub(crate) top_n: usize,
    /// Number of nearest neighbours to aggregate.
    pub(crate) k_neighbors: usize,
    /// Optional JSON results path.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.data_dir.join(RATINGS_FILE))?;
        Self::require_existing(&self.data_dir.join(ITEMS_FILE))?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path) -> Result<(), CliError> {
        if path.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingDataset {
                path: path.to_path_buf(),
            })
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let user_id = args.user_id.ok_or(CliError::MissingArgument {
            field: ARG_USER_ID,
            env: ENV_USER_ID,
        })?;
        Ok(Self {
            user_id,
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            top_n: args.top_n.unwrap_or(DEFAULT_TOP_N),
            k_neighbors: args.k_neighbors.unwrap_or(DEFAULT_K_NEIGHBORS),
            output: args.output,
        })
    }
}

/// One entry of the rendered recommendation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ReportEntry {
    /// Recommended item id.
    pub(crate) item: ItemId,
    /// Item title, or the bare id when the metadata lacks the item.
    pub(crate) movie: String,
    /// Accumulated weighted score, rounded to three decimals.
    pub(crate) score: f64,
    /// Justifications from the top contributing neighbours.
    pub(crate) reasons: Vec<String>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = execute_recommend(&config)?;
    render_report(writer, &config, &report)?;
    if let Some(path) = &config.output {
        write_report_file(path, &report)?;
    }
    Ok(())
}

fn execute_recommend(config: &RecommendConfig) -> Result<Vec<ReportEntry>, CliError> {
    let (ratings, items) = load_dataset(&config.data_dir)?;
    let matrix = UserItemMatrix::from_ratings(&ratings);
    let recommendations = recommend(&matrix, config.user_id, config.top_n, config.k_neighbors)?;

    let titles: BTreeMap<ItemId, &str> = items
        .iter()
        .map(|item| (item.id, item.title.as_str()))
        .collect();
    let report = recommendations
        .into_iter()
        .map(|rec| ReportEntry {
            item: rec.item,
            movie: titles
                .get(&rec.item)
                .map_or_else(|| rec.item.to_string(), ToString::to_string),
            score: round_score(rec.score),
            reasons: rec.reasons,
        })
        .collect();
    Ok(report)
}

/// Round to three decimals for stable, readable report payloads.
fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

fn render_report(
    writer: &mut dyn Write,
    config: &RecommendConfig,
    report: &[ReportEntry],
) -> Result<(), CliError> {
    if report.is_empty() {
        writeln!(
            writer,
            "No recommendations for user {}: no neighbours with positive similarity rated anything new.",
            config.user_id
        )
        .map_err(CliError::WriteReport)?;
        return Ok(());
    }

    writeln!(
        writer,
        "Top-{} recommendations for user {}:",
        report.len(),
        config.user_id
    )
    .map_err(CliError::WriteReport)?;
    for (position, entry) in report.iter().enumerate() {
        writeln!(
            writer,
            "{}. {} (score={:.3})",
            position + 1,
            entry.movie,
            entry.score
        )
        .map_err(CliError::WriteReport)?;
        for reason in &entry.reasons {
            writeln!(writer, "   {reason}").map_err(CliError::WriteReport)?;
        }
    }
    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &[ReportEntry]) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| CliError::CreateOutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?;
    std::fs::write(path, payload).map_err(CliError::WriteReport)
}

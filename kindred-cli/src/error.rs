//! Error types emitted by the kindred CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use kindred_data::{DATASET_URL, DataError};
use kindred_scorer::RecommendError;
use thiserror::Error;

/// Errors emitted by the kindred CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing CLI flag.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// A dataset resource does not exist at the configured location.
    #[error("dataset resource {path} does not exist; download and extract {DATASET_URL}")]
    MissingDataset {
        /// Path that was probed.
        path: Utf8PathBuf,
    },
    /// Loading or parsing the dataset failed.
    #[error("failed to load dataset: {0}")]
    LoadDataset(#[from] DataError),
    /// The recommendation pipeline rejected the request.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// Serialising the recommendation report failed.
    #[error("failed to serialize recommendation report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Creating the directory for the results file failed.
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing the results file or terminal output failed.
    #[error("failed to write recommendations: {0}")]
    WriteReport(#[source] std::io::Error),
}

//! Unit and pipeline coverage for the `recommend` command.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::CliError;
use crate::recommend::{RecommendArgs, RecommendConfig, ReportEntry, run_recommend_with};

/// Users 1 and 2 agree exactly on items 1 and 2; only user 2 rated item 9.
const RATINGS: &str = "1\t1\t5\t0\n1\t2\t3\t0\n2\t1\t5\t0\n2\t2\t3\t0\n2\t9\t4\t0\n";

fn item_record(id: u32, title: &str) -> String {
    format!("{id}|{title}|01-Jan-1995||url{}\n", "|0".repeat(19))
}

#[fixture]
fn dataset_dir() -> TempDir {
    let dir = TempDir::new().expect("create tempdir");
    let items = [
        item_record(1, "Toy Story (1995)"),
        item_record(2, "Heat (1995)"),
        item_record(9, "GoldenEye (1995)"),
    ]
    .concat();
    std::fs::write(dir.path().join("u.data"), RATINGS).expect("write u.data");
    std::fs::write(dir.path().join("u.item"), items).expect("write u.item");
    dir
}

fn utf8_dir(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 tempdir")
}

fn args_for(dir: &TempDir, user_id: u32) -> RecommendArgs {
    RecommendArgs {
        user_id: Some(user_id),
        data_dir: Some(utf8_dir(dir)),
        ..RecommendArgs::default()
    }
}

#[rstest]
fn config_defaults_apply() {
    let config = RecommendConfig::try_from(RecommendArgs {
        user_id: Some(196),
        ..RecommendArgs::default()
    })
    .expect("user id satisfies the config");

    assert_eq!(config.user_id, 196);
    assert_eq!(config.data_dir, Utf8PathBuf::from("data/ml-100k"));
    assert_eq!(config.top_n, 5);
    assert_eq!(config.k_neighbors, 30);
    assert!(config.output.is_none());
}

#[rstest]
fn missing_user_id_is_reported() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("user id is mandatory");
    assert!(matches!(
        err,
        CliError::MissingArgument {
            field: "user-id",
            ..
        }
    ));
}

#[rstest]
fn missing_dataset_is_reported() {
    let dir = TempDir::new().expect("create tempdir");
    let config = RecommendConfig::try_from(args_for(&dir, 1)).expect("valid args");
    let err = config
        .validate_sources()
        .expect_err("tempdir holds no dataset");
    assert!(matches!(err, CliError::MissingDataset { .. }));
}

#[rstest]
fn pipeline_renders_report_and_json(dataset_dir: TempDir) {
    let output = utf8_dir(&dataset_dir).join("outputs/recs_user_1.json");
    let mut args = args_for(&dataset_dir, 1);
    args.output = Some(output.clone());

    let mut rendered = Vec::new();
    run_recommend_with(args, &mut rendered).expect("pipeline succeeds");

    let text = String::from_utf8(rendered).expect("utf8 report");
    assert!(text.contains("Top-1 recommendations for user 1:"));
    assert!(text.contains("1. GoldenEye (1995) (score=4.000)"));
    assert!(text.contains("   U2 rated 4.0 (sim 1.00)"));

    let payload = std::fs::read_to_string(&output).expect("results file exists");
    let report: Vec<ReportEntry> = serde_json::from_str(&payload).expect("valid report JSON");
    assert_eq!(report.len(), 1);
    let entry = report.first().expect("one entry");
    assert_eq!(entry.item, 9);
    assert_eq!(entry.movie, "GoldenEye (1995)");
    assert!((entry.score - 4.0).abs() < 1e-9);
}

#[rstest]
fn unknown_title_falls_back_to_the_item_id() {
    let dir = TempDir::new().expect("create tempdir");
    std::fs::write(dir.path().join("u.data"), RATINGS).expect("write u.data");
    // Metadata only covers the items the target already rated.
    let items = [
        item_record(1, "Toy Story (1995)"),
        item_record(2, "Heat (1995)"),
    ]
    .concat();
    std::fs::write(dir.path().join("u.item"), items).expect("write u.item");

    let mut rendered = Vec::new();
    run_recommend_with(args_for(&dir, 1), &mut rendered).expect("pipeline succeeds");

    let text = String::from_utf8(rendered).expect("utf8 report");
    assert!(text.contains("1. 9 (score=4.000)"));
}

#[rstest]
fn isolated_user_gets_a_graceful_empty_report(dataset_dir: TempDir) {
    // User 3 rates only an item nobody else has seen.
    let ratings = format!("{RATINGS}3\t50\t5\t0\n3\t51\t2\t0\n");
    std::fs::write(dataset_dir.path().join("u.data"), ratings).expect("write u.data");

    let mut rendered = Vec::new();
    run_recommend_with(args_for(&dataset_dir, 3), &mut rendered).expect("empty is not an error");

    let text = String::from_utf8(rendered).expect("utf8 report");
    assert!(text.contains("No recommendations for user 3"));
}

#[rstest]
fn absent_user_propagates_user_not_found(dataset_dir: TempDir) {
    let mut rendered = Vec::new();
    let err = run_recommend_with(args_for(&dataset_dir, 42), &mut rendered)
        .expect_err("user 42 is not in the matrix");
    assert!(matches!(err, CliError::Recommend(_)));
}

use crate::harness::TestContext;
use sequana_demultiplex::{
    AppError, LaunchOptions, PipelineConfig, RunMode, RunOptions, launch, launch_at, materialize,
};
use serial_test::serial;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

fn options(bcl: &str) -> LaunchOptions {
    LaunchOptions::new(RunOptions::new(RunMode::Local, bcl))
}

#[test]
fn launch_at_stages_pipeline_under_base() {
    let temp = TempDir::new().unwrap();

    let summary = launch_at(temp.path(), options("/data/run1")).expect("launch failed");

    assert_eq!(summary.working_directory, temp.path().join("demultiplex"));
    assert_eq!(summary.script, temp.path().join("demultiplex/demultiplex.sh"));
    assert!(summary.config.exists());
    assert_eq!(
        summary.staged,
        vec![
            "demultiplex.rules",
            "demultiplex.sh",
            "config.yaml",
            ".sequana/config.yaml",
            "schema.yaml",
        ]
    );
}

#[test]
fn identical_options_produce_byte_identical_configs() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let mut opts = options("/data/run1");
    opts.run.samplesheet = Some(PathBuf::from("/data/run1/SampleSheet.csv"));

    let a = launch_at(first.path(), opts.clone()).unwrap();
    let b = launch_at(second.path(), opts).unwrap();

    let a = std::fs::read(a.config).unwrap();
    let b = std::fs::read(b.config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn existing_working_directory_is_already_exists_error() {
    let temp = TempDir::new().unwrap();
    launch_at(temp.path(), options("/data/run1")).unwrap();

    let err = launch_at(temp.path(), options("/data/run1")).unwrap_err();

    assert!(matches!(err, AppError::WorkdirExists(_)));
    assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
}

#[test]
fn empty_bcl_directory_leaves_no_working_directory() {
    let temp = TempDir::new().unwrap();

    let err = launch_at(temp.path(), options("")).unwrap_err();

    assert!(matches!(err, AppError::MissingBclDirectory));
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(!temp.path().join("demultiplex").exists());
}

#[test]
fn staged_config_matches_materialized_config() {
    let temp = TempDir::new().unwrap();
    let opts = options("/data/run1");

    let summary = launch_at(temp.path(), opts.clone()).unwrap();

    let staged =
        PipelineConfig::from_yaml(&std::fs::read_to_string(summary.config).unwrap()).unwrap();
    assert_eq!(staged, materialize(&opts.run).unwrap());
}

#[test]
#[serial]
fn launch_uses_current_directory() {
    let ctx = TestContext::new();

    let summary = ctx.with_work_dir(|| launch(options("runs/run1"))).expect("launch failed");

    assert_eq!(summary.working_directory, ctx.pipeline_dir());
    let config = ctx.read_config();
    assert_eq!(
        config["input_directory"].as_str(),
        ctx.work_dir().join("runs/run1").to_str()
    );
}

#[test]
#[serial]
fn relative_paths_resolve_against_the_directory_at_call_time() {
    let ctx = TestContext::new();
    let run = RunOptions::new(RunMode::Local, "run1");

    let first = ctx.with_work_dir(|| materialize(&run)).unwrap();
    let second = ctx.with_work_dir(|| materialize(&run)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.input_directory, ctx.work_dir().join("run1"));
}

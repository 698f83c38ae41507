use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn second_launch_requires_force() {
    let ctx = TestContext::new();
    let args = ["--run-mode", "local", "--bcl-directory", "/data/run1"];

    ctx.cli().args(args).assert().success();

    ctx.cli()
        .args(args)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn force_overwrites_existing_working_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--run-mode", "local", "--bcl-directory", "/data/run1", "--threads", "2"])
        .assert()
        .success();

    ctx.cli()
        .args([
            "--run-mode",
            "local",
            "--bcl-directory",
            "/data/run2",
            "--threads",
            "6",
            "--force",
        ])
        .assert()
        .success();

    let config = ctx.read_config();
    assert_eq!(config["input_directory"].as_str(), Some("/data/run2"));
    assert_eq!(config["bcl2fastq"]["threads"].as_i64(), Some(6));
}

#[test]
fn forced_local_launch_drops_cluster_config_from_slurm_run() {
    let ctx = TestContext::new();

    ctx.cli().args(["--run-mode", "slurm", "--bcl-directory", "/data/run1"]).assert().success();
    assert!(ctx.pipeline_dir().join("cluster_config.json").exists());

    ctx.cli()
        .args(["--run-mode", "local", "--bcl-directory", "/data/run1", "--force"])
        .assert()
        .success();

    assert!(!ctx.pipeline_dir().join("cluster_config.json").exists());
    assert!(!ctx.read_pipeline_file("demultiplex.sh").contains("--cluster"));
}

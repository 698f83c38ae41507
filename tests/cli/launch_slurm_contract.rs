use crate::harness::TestContext;

#[test]
fn slurm_launch_writes_cluster_config_and_cluster_command() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "--run-mode",
            "slurm",
            "--bcl-directory",
            "/data/run1",
            "--slurm-queue",
            "biomics",
            "--slurm-memory",
            "8000",
            "--slurm-cores-per-job",
            "2",
            "--jobs",
            "10",
            "--keep-going",
        ])
        .assert()
        .success();

    let cluster: serde_json::Value =
        serde_json::from_str(&ctx.read_pipeline_file("cluster_config.json")).unwrap();
    assert_eq!(cluster["__default__"]["memory"], 8000);
    assert_eq!(cluster["__default__"]["cores"], 2);
    assert_eq!(cluster["__default__"]["queue"], "biomics");

    let script = ctx.read_pipeline_file("demultiplex.sh");
    assert!(script.contains("--jobs 10 --nolock --cluster-config cluster_config.json"));
    assert!(script.contains("sbatch --mem {cluster.memory} -c {cluster.cores} -p biomics"));
    assert!(script.trim_end().ends_with("--keep-going"));
}

#[test]
fn slurm_and_local_produce_the_same_config() {
    let local = TestContext::new();
    let slurm = TestContext::new();

    for (ctx, mode) in [(&local, "local"), (&slurm, "slurm")] {
        ctx.cli().args(["--run-mode", mode, "--bcl-directory", "/data/run1"]).assert().success();
    }

    assert_eq!(local.read_pipeline_file("config.yaml"), slurm.read_pipeline_file("config.yaml"));
}

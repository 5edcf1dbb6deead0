//! Cross-process determinism: spawns `replan_fixture` under several
//! environment variants and asserts identical stdout.

use std::path::Path;
use std::process::Command;

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the fixture
/// binary lives one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("replan_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(args: &[&str], work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command.args(args).current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "replan_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn assert_stable_across_envs(args: &[&str]) -> String {
    let root = workspace_root();
    let baseline = run_variant(args, &root, &[]);

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    assert_eq!(
        baseline,
        run_variant(args, alt_cwd, &[]),
        "{args:?}: output differs when cwd changes"
    );
    assert_eq!(
        baseline,
        run_variant(args, &root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "{args:?}: output differs when LC_ALL=C LANG=C"
    );
    assert_eq!(
        baseline,
        run_variant(
            args,
            &root,
            &[
                ("RUST_LOG", "trace"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
            ],
        ),
        "{args:?}: output differs with RUST_LOG=trace and spurious env vars"
    );
    baseline
}

#[test]
fn crossproc_wall_scenario() {
    let out = assert_stable_across_envs(&[]);
    assert!(out.contains("scenario=wall_5x5\n"));
    assert!(out.contains("status=success\n"));
    assert!(out.contains("first_plan_len=9\n"));
    assert!(out.contains("known_obstacles=6\n"));
    assert!(out.contains("final_path_len=9\n"));
    assert!(out.contains("report_digest=sha256:"));
}

#[test]
fn crossproc_enclosed_goal() {
    let out = assert_stable_across_envs(&["enclosed_goal"]);
    assert!(out.contains("status=stuck\n"));
    assert!(out.contains("final_path_len=0\n"));
}

#[test]
fn crossproc_random_field() {
    let out = assert_stable_across_envs(&["random", "--size", "20", "--seed", "7", "--density", "0.3"]);
    assert!(out.contains("scenario=random\n"));
    assert!(out.contains("knowledge_digest=sha256:"));
}

#[test]
fn sensing_radius_changes_the_run_not_the_determinism() {
    let adjacent = assert_stable_across_envs(&["--radius", "1"]);
    let wide = assert_stable_across_envs(&["--radius", "4"]);
    assert_ne!(adjacent, wide);
}

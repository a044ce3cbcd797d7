//! Cross-process determinism.
//!
//! Spawns the `route_fixture` binary under several environment variants and
//! asserts that all produce identical stdout. This proves that route reports
//! and traces are not influenced by process-level state (cwd, locale,
//! hash seeds, log filters).

use std::path::Path;
use std::process::Command;

/// Resolve the workspace root.
fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the binary with the given cwd and environment overrides.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_route_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("WAYPOINT_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "route_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    // Sanity: output should contain expected fields.
    assert!(
        baseline.contains("diamond_path=A,C,D,E\n"),
        "baseline output missing diamond_path: {baseline}"
    );
    assert!(baseline.contains("diamond_cost=5\n"));
    assert!(baseline.contains("diamond_report_digest=sha256:"));
    assert!(baseline.contains("grid_trace_digest=sha256:"));
    assert!(baseline.contains("all_routes=A:0;B:1;C:2;D:3;E:5\n"));

    // Variant 2: different cwd.
    let alt_cwd = std::env::temp_dir();
    let alt_cwd = alt_cwd.to_string_lossy();
    let variant_cwd = run_variant(&alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    // Variant 4: spurious env vars.
    let variant_noise = run_variant(
        &root,
        &[
            ("WAYPOINT_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");

    // Variant 5: verbose logging must stay on stderr.
    let variant_logging = run_variant(&root, &[("WAYPOINT_LOG", "trace")]);
    assert_eq!(
        baseline, variant_logging,
        "output differs when WAYPOINT_LOG=trace"
    );
}

#[test]
fn crossproc_repeated_runs_identical() {
    let root = workspace_root();
    let first = run_variant(&root, &[]);
    for i in 1..5 {
        assert_eq!(first, run_variant(&root, &[]), "run {i} differed");
    }
}

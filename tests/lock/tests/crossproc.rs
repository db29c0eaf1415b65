//! Cross-process determinism: spawns `plan_fixture` under several
//! environment variants and asserts all produce identical stdout.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("plan_fixture");
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

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
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
        "plan_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("[corridor]\n"));
    assert!(baseline.contains("actions=east,east\n"));
    assert!(baseline.contains("outcome=exhausted\n"));
    assert!(baseline.contains("termination_reason=goal_reached\n"));
    assert!(baseline.contains("bundle_digest=sha256:"));
    assert!(!baseline.contains("replay=illegal_action"));

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    assert_eq!(
        baseline,
        run_variant(alt_cwd, &[]),
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );

    // Verbose logging goes to stderr and must not leak into stdout.
    assert_eq!(
        baseline,
        run_variant(&root, &[("RUST_LOG", "trace")]),
        "output differs with RUST_LOG=trace"
    );

    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("FORAGE_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
            ],
        ),
        "output differs with spurious env vars"
    );
}

//! End-to-End CLI Tests for maintainme

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the maintainme binary
fn maintainme() -> Command {
    cargo_bin_cmd!("maintainme")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        maintainme()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("plans"));
    }

    #[test]
    fn shows_version() {
        maintainme()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_theme() {
        maintainme()
            .args(["render", "--theme", "sepia"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown theme 'sepia'"));
    }
}

// ============================================
// Render
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_to_stdout_by_default() {
        let temp = TempDir::new().expect("temp dir");
        maintainme()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(r#"class="dark""#))
            .stdout(predicate::str::contains("MaintainME Premium"));
    }

    #[test]
    fn writes_output_file() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist/index.html");

        maintainme()
            .current_dir(temp.path())
            .args(["render", "--theme", "light", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = std::fs::read_to_string(&out).expect("output written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("page bg-white"));
        assert!(html.contains("Toggle theme"));
    }

    #[test]
    fn picks_up_config_from_working_directory() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("maintainme.toml"),
            concat!(
                "[site]\ntitle = \"Config Title\"\n\n",
                "[render]\ntheme = \"light\"\noutput = \"public/index.html\"\n",
            ),
        )
        .expect("write config");

        maintainme()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("public/index.html"))
            .expect("configured output written");
        assert!(html.contains("<title>Config Title</title>"));
        assert!(html.contains("page bg-white"));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        maintainme()
            .current_dir(temp.path())
            .args(["render", "--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read missing.toml"));
    }
}

// ============================================
// Plans
// ============================================

mod plans {
    use super::*;

    #[test]
    fn lists_plans_as_text() {
        maintainme()
            .arg("plans")
            .assert()
            .success()
            .stdout(predicate::str::contains("MaintainME Basic: $249/acre/year"))
            .stdout(predicate::str::contains("  - Regular blade changes"));
    }

    #[test]
    fn lists_plans_as_json() {
        let output = maintainme()
            .args(["plans", "--json"])
            .output()
            .expect("run maintainme");
        assert!(output.status.success());

        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("valid json");
        assert_eq!(value[0]["tier"], "basic");
        assert_eq!(value[1]["tier"], "premium");
        assert_eq!(value[1]["billing"], "/acre/month");
    }
}

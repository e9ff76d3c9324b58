//! Integration tests for the command-line interface.
//!
//! These tests run the built binary against files in a temporary
//! directory. Every invocation passes `--config` so the user's own
//! configuration is never read or written.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NODEJS: &str = "\
document: modulemd
version: 2
data:
  name: nodejs
  stream: '18'
  version: 20230101
  context: 6c81f848
  arch: x86_64
  summary: Javascript runtime
  profiles:
    default:
      rpms: [nodejs, npm]
  components:
    rpms:
      nodejs:
        rationale: Runtime
        ref: '18'
";

// =============================================================================
// Test Fixtures
// =============================================================================

/// Working directory holding documents and an empty config file.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config_path(&self) -> PathBuf {
        self.path().join("config.toml")
    }

    fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }

    fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap()
    }

    /// The binary, run inside the workspace with its config file.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("modulemd").expect("binary built");
        cmd.current_dir(self.path())
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}

// =============================================================================
// check
// =============================================================================

mod check {
    use super::*;

    #[test]
    fn reports_identifier() {
        let ws = Workspace::new();
        ws.write("nodejs.yaml", NODEJS);

        ws.cmd()
            .args(["check", "nodejs.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "ok nodejs.yaml nodejs:18:20230101:6c81f848:x86_64",
            ));
    }

    #[test]
    fn reports_every_document_in_stream() {
        let ws = Workspace::new();
        ws.write(
            "modules.yaml",
            "---\ndocument: modulemd\ndata:\n  name: a\n  stream: s\n\
             ---\ndocument: modulemd\ndata:\n  name: b\n",
        );

        ws.cmd()
            .args(["check", "modules.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ok modules.yaml a:s"))
            .stdout(predicate::str::contains("ok modules.yaml b"));
    }

    #[test]
    fn fails_on_malformed_file_but_checks_the_rest() {
        let ws = Workspace::new();
        ws.write("nodejs.yaml", NODEJS);
        ws.write("bad.yaml", "data: [unclosed\n");

        ws.cmd()
            .args(["check", "bad.yaml", "nodejs.yaml"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("ok nodejs.yaml"))
            .stderr(predicate::str::contains("bad.yaml"))
            .stderr(predicate::str::contains("1 of 2 files failed to decode"));
    }

    #[test]
    fn missing_file_fails() {
        let ws = Workspace::new();

        ws.cmd()
            .args(["check", "missing.yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.yaml"));
    }

    #[test]
    fn quiet_suppresses_output() {
        let ws = Workspace::new();
        ws.write("nodejs.yaml", NODEJS);

        ws.cmd()
            .args(["check", "nodejs.yaml", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

// =============================================================================
// show
// =============================================================================

mod show {
    use super::*;

    #[test]
    fn prints_summary() {
        let ws = Workspace::new();
        ws.write("nodejs.yaml", NODEJS);

        ws.cmd()
            .args(["show", "nodejs.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("nodejs"))
            .stdout(predicate::str::contains("Javascript runtime"))
            .stdout(predicate::str::contains("1 rpms, 0 modules"));
    }

    #[test]
    fn prints_json() {
        let ws = Workspace::new();
        ws.write("nodejs.yaml", NODEJS);

        let output = ws
            .cmd()
            .args(["show", "nodejs.yaml", "--json"])
            .output()
            .expect("run show");
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["data"]["name"], "nodejs");
        assert_eq!(value["data"]["components"]["rpms"]["nodejs"]["ref"], "18");
    }
}

// =============================================================================
// fmt
// =============================================================================

mod fmt {
    use super::*;

    #[test]
    fn rewrites_in_place() {
        let ws = Workspace::new();
        ws.write(
            "perl.yaml",
            "version: 2\ndocument: modulemd\ndata:\n  stream: '5.32'\n  name: perl\n  summary: ''\n",
        );

        ws.cmd()
            .args(["fmt", "perl.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("formatted perl.yaml"));

        let written = ws.read("perl.yaml");
        assert!(written.starts_with("document: modulemd\nversion: 2\ndata:\n  name: perl\n  stream: "));
        assert!(written.contains("5.32"));
        assert!(!written.contains("summary"));
    }

    #[test]
    fn writes_to_output_path() {
        let ws = Workspace::new();
        ws.write("nodejs.yaml", NODEJS);

        ws.cmd()
            .args(["fmt", "nodejs.yaml", "-o", "out/nodejs.yaml", "--atomic"])
            .assert()
            .success();

        assert_eq!(ws.read("nodejs.yaml"), NODEJS);
        let written = ws.read("out/nodejs.yaml");
        assert!(written.starts_with("document: modulemd\n"));
        assert!(!ws.path().join("out/nodejs.yaml.tmp").exists());
    }

    #[test]
    fn output_is_stable() {
        let ws = Workspace::new();
        ws.write("nodejs.yaml", NODEJS);

        ws.cmd().args(["fmt", "nodejs.yaml"]).assert().success();
        let first = ws.read("nodejs.yaml");
        ws.cmd().args(["fmt", "nodejs.yaml"]).assert().success();

        assert_eq!(ws.read("nodejs.yaml"), first);
    }

    #[test]
    fn malformed_input_left_untouched() {
        let ws = Workspace::new();
        ws.write("bad.yaml", "data: [unclosed\n");

        ws.cmd().args(["fmt", "bad.yaml"]).assert().failure();

        assert_eq!(ws.read("bad.yaml"), "data: [unclosed\n");
    }
}

// =============================================================================
// config
// =============================================================================

mod config {
    use super::*;

    #[test]
    fn set_then_get() {
        let ws = Workspace::new();

        ws.cmd()
            .args(["config", "set", "save.strategy", "atomic"])
            .assert()
            .success();
        ws.cmd()
            .args(["config", "get", "save.strategy"])
            .assert()
            .success()
            .stdout(predicate::str::diff("atomic\n"));

        assert!(ws.read("config.toml").contains("strategy = \"atomic\""));
    }

    #[test]
    fn list_shows_unset_keys() {
        let ws = Workspace::new();

        ws.cmd()
            .args(["config", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("save.strategy = (not set)"));
    }

    #[test]
    fn rejects_unknown_key() {
        let ws = Workspace::new();

        ws.cmd()
            .args(["config", "set", "save.colour", "blue"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("save.colour"));
    }

    #[test]
    fn rejects_bad_strategy() {
        let ws = Workspace::new();

        ws.cmd()
            .args(["config", "set", "save.strategy", "sometimes"])
            .assert()
            .failure();
    }

    #[test]
    fn configured_strategy_used_by_fmt() {
        let ws = Workspace::new();
        ws.write("config.toml", "[save]\nstrategy = \"atomic\"\n");
        ws.write("nodejs.yaml", NODEJS);

        ws.cmd().args(["fmt", "nodejs.yaml"]).assert().success();

        assert!(!ws.path().join("nodejs.yaml.tmp").exists());
        assert!(ws.read("nodejs.yaml").contains("name: nodejs"));
    }

    #[test]
    fn invalid_config_file_fails_other_commands() {
        let ws = Workspace::new();
        ws.write("config.toml", "[save]\nstrategy = \"sometimes\"\n");
        ws.write("nodejs.yaml", NODEJS);

        ws.cmd()
            .args(["check", "nodejs.yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("config"));
    }
}

// =============================================================================
// completion
// =============================================================================

mod completion {
    use super::*;

    #[test]
    fn bash_script_names_binary() {
        let ws = Workspace::new();

        ws.cmd()
            .args(["completion", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("modulemd"));
    }
}

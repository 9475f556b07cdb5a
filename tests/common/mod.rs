use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let project = make_fixture_project(tmp.path());

        Self {
            _tmp: tmp,
            home,
            project,
        }
    }

    /// Fresh directory under the same tempdir, for tests that want to start
    /// without the fixture config.
    pub fn fresh_dir(&self, name: &str) -> PathBuf {
        let dir = self._tmp.path().join(name);
        fs::create_dir_all(&dir).expect("create fresh dir");
        dir
    }

    pub fn cmd(&self) -> Command {
        self.cmd_in(&self.project)
    }

    pub fn cmd_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("presmoke").expect("presmoke binary");
        cmd.current_dir(dir)
            .env("HOME", &self.home)
            .env_remove("APP_ENV");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_with_mode(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .env("APP_ENV", "test")
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.project.join("smoke.toml"), content).expect("write smoke config");
    }
}

fn make_fixture_project(base: &Path) -> PathBuf {
    let project = base.join("project");
    fs::create_dir_all(&project).expect("create project dir");
    fs::write(
        project.join("smoke.toml"),
        r#"[suite]
name = "Project Setup - Smoke Test"

[env]
mode_var = "APP_ENV"
"#,
    )
    .expect("write smoke config");
    project
}

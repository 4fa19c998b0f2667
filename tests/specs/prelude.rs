//! Shared helpers for CLI specs

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

pub use serde_json::Value;

/// A throwaway farm: one state directory per test
pub struct Farm {
    dir: TempDir,
}

impl Farm {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the state directory
    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// `kb` pointed at this farm
    pub fn kb(&self) -> Cli {
        let mut cmd = Command::cargo_bin("kb").unwrap();
        cmd.env_remove("KEBUN_STATE_DIR")
            .env_remove("KEBUN_LOG")
            .arg("--state-dir")
            .arg(self.path());
        Cli { cmd }
    }

    /// Add a crop and return its id
    pub fn crop(&self, name: &str, extra: &[&str]) -> String {
        let mut args = vec!["--output", "json", "crop", "add", name];
        args.extend_from_slice(extra);
        id_of(&self.kb().args(&args).passes().json())
    }

    /// Add a location and return its id
    pub fn location(&self, name: &str) -> String {
        let out = self
            .kb()
            .args(&["--output", "json", "location", "add", name])
            .passes();
        id_of(&out.json())
    }

    /// Start a batch at an explicit time and return its id
    pub fn batch(&self, crop: &str, location: &str, at: &str) -> String {
        let out = self
            .kb()
            .args(&["--output", "json", "batch", "start", crop, location, "--at", at])
            .passes();
        id_of(&out.json())
    }
}

fn id_of(value: &Value) -> String {
    value["id"].as_str().unwrap().to_string()
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run without the `--state-dir` flag, for testing resolution
    pub fn bare() -> Self {
        let mut cmd = Command::cargo_bin("kb").unwrap();
        cmd.env_remove("KEBUN_STATE_DIR").env_remove("KEBUN_LOG");
        Cli { cmd }
    }

    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.assert().success().get_output().clone();
        RunAssert::from(output)
    }

    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.assert().failure().get_output().clone();
        RunAssert::from(output)
    }
}

pub struct RunAssert {
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            predicate::str::contains(needle).eval(&self.stdout),
            "stdout missing {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            predicate::str::contains(needle).eval(&self.stderr),
            "stderr missing {needle:?}:\n{}",
            self.stderr
        );
        self
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory with its own database file, so
//! tests never share state and parallel execution is safe.

use anyhow::Result;
use assert_cmd::Command;
use recylog_store::Store;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment around a throwaway database file.
///
/// # Example
/// ```no_run
/// use recylog_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    db_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("materials.db");

        Self {
            temp_dir,
            db_path,
            env_vars: HashMap::new(),
        }
    }

    /// Path of this world's database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// The temp directory root, for scratch files like CSV exports.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Open the world's database directly, bypassing the CLI. Useful
    /// for seeding state or asserting on rows after a command ran.
    pub fn store(&self) -> Result<Store> {
        Store::open(&self.db_path)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--db")
            .arg(&self.db_path)
            .arg("--color")
            .arg("never");

        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a recylog command against this world's database.
    ///
    /// Uses `Command::cargo_bin()`, so the binary must be built (cargo
    /// test does this automatically for integration tests).
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("recylog")
            .map_err(|e| anyhow::anyhow!("Failed to find recylog binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

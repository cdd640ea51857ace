//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp directory and a config path inside it, and
//! passes `--config` on every run so tests never touch the real user
//! config.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use cardshelf_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_catalog("catalog.csv", fixtures::SAMPLE_CATALOG);
///
/// let result = world.run(&["list", "--source", "catalog.csv"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
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
        let config_path = temp_dir.path().join("config").join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Config file passed via `--config` (may not exist yet).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Absolute path of a file inside the world.
    pub fn path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Write a catalog file (relative to the temp root).
    pub fn write_catalog(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Builder form of [`TestWorld::write_catalog`].
    pub fn with_catalog(self, name: &str, contents: &str) -> Self {
        self.write_catalog(name, contents)
            .expect("Failed to write catalog");
        self
    }

    /// Write the config file verbatim.
    pub fn write_config(&self, toml: &str) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    pub fn with_config(self, toml: &str) -> Self {
        self.write_config(toml).expect("Failed to write config");
        self
    }

    /// Point `[catalog] source` at a catalog inside the world.
    pub fn with_configured_catalog(self, name: &str) -> Self {
        let source = self.path(name);
        let toml = format!(
            "[catalog]\nsource = {}\n",
            toml_string(&source.display().to_string())
        );
        self.with_config(&toml)
    }

    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.env_vars.insert(key.into(), value.into());
    }

    /// Configure a command with the world's config, cwd and environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path());
        cmd.arg("--config").arg(&self.config_path);

        // Keep output deterministic regardless of the caller's shell
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("CARDSHELF_CONFIG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute the `cardshelf` binary and capture its output.
    ///
    /// # Note
    /// Uses `Command::cargo_bin()`, which relies on the `CARGO_BIN_EXE_`
    /// variables cargo sets for integration tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, None)
    }

    /// Like [`TestWorld::run`], feeding `stdin` to the process.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: Option<&str>) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("cardshelf")
            .map_err(|e| anyhow::anyhow!("Failed to find cardshelf binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        if let Some(input) = stdin {
            cmd.write_stdin(input);
        }

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Quote a string as a TOML basic string.
fn toml_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_string_escapes() {
        assert_eq!(toml_string(r"C:\cards"), r#""C:\\cards""#);
        assert_eq!(toml_string("a\"b"), r#""a\"b""#);
    }

    #[test]
    fn test_world_writes_inside_temp_dir() -> Result<()> {
        let world = TestWorld::new().with_configured_catalog("shop/catalog.csv");
        let path = world.write_catalog("shop/catalog.csv", "name\nMew\n")?;

        assert!(path.starts_with(world.temp_dir()));
        let config = std::fs::read_to_string(world.config_path())?;
        assert!(config.contains("catalog.csv"));
        Ok(())
    }
}

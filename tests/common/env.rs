//! Test environment builder for isolated xfact runs.
//!
//! Every run gets its own working directory and HOME so that neither a
//! developer's `~/.config/xfact/config.toml` nor an `xfact.toml` in the
//! repository leaks into the assertions.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the xfact CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// stdout split into parsed NDJSON events
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON: {:?} ({})", l, e))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    xfact_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Location the binary is told to use for the user config
    pub fn user_config_path(&self) -> PathBuf {
        self.home_dir.path().join(".config/xfact/config.toml")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_full(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_full(args, env_vars, None)
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_full(args, &[], Some(stdin.as_bytes()))
    }

    /// Run with raw stdin bytes (not necessarily UTF-8)
    pub fn run_with_stdin_bytes(&self, args: &[&str], stdin: &[u8]) -> TestResult {
        self.run_full(args, &[], Some(stdin))
    }

    /// Run without some of the variables the environment sets by default
    pub fn run_without_env(&self, args: &[&str], removed: &[&str]) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for key in removed {
            cmd.env_remove(key);
        }
        spawn(cmd, None)
    }

    pub fn run_full(
        &self,
        args: &[&str],
        env_vars: &[(&str, &str)],
        stdin: Option<&[u8]>,
    ) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        spawn(cmd, stdin)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.xfact_bin);
        cmd.current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("XFACT_USER_CONFIG_PATH", self.user_config_path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("XFACT_WIDTH")
            .env_remove("XFACT_SENTINEL")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn(mut cmd: Command, stdin: Option<&[u8]>) -> TestResult {
    let output = match stdin {
        Some(input) => {
            cmd.stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
            let mut child = cmd.spawn().expect("Failed to spawn xfact");
            child
                .stdin
                .take()
                .expect("stdin is piped")
                .write_all(input)
                .expect("Failed to write stdin");
            child.wait_with_output().expect("Failed to wait for xfact")
        }
        None => cmd.stdin(Stdio::null()).output().expect("Failed to execute xfact"),
    };

    to_result(output)
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    project_config: Option<String>,
    user_config: Option<String>,
}

impl TestEnvBuilder {
    /// Write `xfact.toml` into the project directory
    pub fn with_project_config(mut self, content: &str) -> Self {
        self.project_config = Some(content.to_string());
        self
    }

    /// Write the user-level config into the isolated home directory
    pub fn with_user_config(mut self, content: &str) -> Self {
        self.user_config = Some(content.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            xfact_bin: PathBuf::from(env!("CARGO_BIN_EXE_xfact")),
        };

        if let Some(content) = &self.project_config {
            write_file(&env.project_path("xfact.toml"), content);
        }
        if let Some(content) = &self.user_config {
            write_file(&env.user_config_path(), content);
        }

        env
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

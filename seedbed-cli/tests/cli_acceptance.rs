//! Acceptance tests for the seedbed binary.
//!
//! These run the real binary but never reach a database: they cover argument
//! handling and the configuration failures that abort a run before any
//! connection is attempted.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_config,
            xdg_state,
        }
    }

    fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.xdg_config.join("config.toml");
        fs::write(&path, contents).expect("failed to write config");
        path
    }
}

fn run_seedbed(env: &CliTestEnv, args: &[&str]) -> Output {
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("seedbed"));

    Command::new(bin_path)
        .args(args)
        .env("HOME", &env.home)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .env_remove("SEEDBED_MONGO_URI")
        .env_remove("SEEDBED_MONGO_DATABASE")
        .env_remove("SEEDBED_APP_USER")
        .env_remove("SEEDBED_APP_PASSWORD")
        .output()
        .expect("failed to execute seedbed")
}

#[test]
fn test_help_lists_subcommands() {
    let env = CliTestEnv::new();
    let output = run_seedbed(&env, &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("Provision and seed"));
}

#[test]
fn test_malformed_config_fails_before_connecting() {
    let env = CliTestEnv::new();
    let config = env.write_config("this is not toml = [");
    let output = run_seedbed(&env, &["check", "--config", config.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("configuration"),
        "stderr should mention the configuration failure: {}",
        stderr
    );
}

#[test]
fn test_init_refuses_to_run_without_app_password() {
    let env = CliTestEnv::new();
    let config = env.write_config(
        r#"
[mongo]
uri = "mongodb://localhost:27017"
database = "source_mongo_db"

[app_user]
username = "mongo_user"
"#,
    );
    let output = run_seedbed(&env, &["init", "--config", config.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("app_user.password"),
        "stderr should point at the missing password: {}",
        stderr
    );

    // Nothing should have been printed on stdout for a failed run.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("MongoDB initialized"));
}

//! End-to-end tests for the `genzbot` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `genzbot` isolated from the developer's environment: fresh working
/// directory, a config path inside it, no API key, no colors.
fn genzbot(work: &Path) -> Command {
    let mut cmd = Command::cargo_bin("genzbot").unwrap();
    cmd.current_dir(work)
        .env_remove("GENZBOT_API_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(work.join("config.toml"));
    cmd
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_env_accepts_any_value() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "true", "yes", "0", ""] {
        genzbot(temp.path())
            .env("NO_COLOR", value)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Backends:"));
    }
}

#[test]
fn new_generates_a_complete_project() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args(["new", "bot", "-b", "gemini", "-k", "AIza-1", "-n", "Nova", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("genzbot run bot"));

    let root = temp.path().join("bot");
    for file in [
        "AI_Service/AIResponse.py",
        "Backend/app.py",
        "Frontend/templates/index.html",
        "Frontend/static/style.css",
        "Frontend/static/script.js",
    ] {
        assert!(
            !read(root.join(file)).is_empty(),
            "{file} missing or empty"
        );
    }
    assert_eq!(read(root.join(".env")), "GOOGLE_API_KEY=\"AIza-1\"\n");
    let manifest = read(root.join("requirements.txt"));
    assert!(manifest.contains("google-generativeai"));
    assert!(!manifest.contains("openai"));
    assert!(read(root.join("Frontend/templates/index.html")).contains("Nova"));
}

#[test]
fn api_key_is_read_from_the_environment() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .env("GENZBOT_API_KEY", "sk-env")
        .args(["new", "bot", "-b", "openai", "-y"])
        .assert()
        .success();

    let env = read(temp.path().join("bot/.env"));
    assert!(env.starts_with("OPENAI_API_KEY="));
    assert!(env.contains("sk-env"));
}

#[test]
fn galaxy_template_copies_the_image() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args(["new", "bot", "-b", "llama", "-k", "gsk_1", "-t", "galaxy", "-y"])
        .assert()
        .success();

    let image = fs::read(temp.path().join("bot/Frontend/static/galaxy_img.png")).unwrap();
    assert!(image.starts_with(b"\x89PNG"));
}

#[test]
fn behavior_reaches_the_response_wrapper() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args([
            "new",
            "bot",
            "-b",
            "mixtral",
            "-k",
            "gsk_1",
            "--behavior",
            "You answer in haiku.",
            "-y",
        ])
        .assert()
        .success();

    let wrapper = read(temp.path().join("bot/AI_Service/AIResponse.py"));
    assert!(wrapper.contains("You answer in haiku."));
    assert!(wrapper.contains("mixtral-8x7b-32768"));
}

#[test]
fn unknown_backend_exits_two_and_lists_choices() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args(["new", "bot", "-b", "claude", "-k", "x", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("claude"))
        .stderr(predicate::str::contains("gemini"))
        .stderr(predicate::str::contains("mixtral"));

    assert!(!temp.path().join("bot").exists());
}

#[test]
fn missing_api_key_exits_two_without_writing() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args(["new", "bot", "-b", "gemma", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("API key is required"))
        .stderr(predicate::str::contains("--api-key"));

    assert!(!temp.path().join("bot").exists());
}

#[test]
fn multiline_api_key_exits_two_without_writing() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args(["new", "bot", "-b", "openai", "-k", "sk-1\nINJECTED=1", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid API key"));

    assert!(!temp.path().join("bot").exists());
}

#[test]
fn missing_backend_without_terminal_exits_two() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args(["new", "bot", "-k", "x", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--backend"));
}

#[test]
fn dry_run_writes_nothing_and_hides_the_key() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args(["new", "bot", "-b", "openai", "-k", "sk-secret", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("AI_Service/AIResponse.py"))
        .stdout(predicate::str::contains("sk-secret").not());

    assert!(!temp.path().join("bot").exists());
}

#[test]
fn regenerating_overwrites_the_credential() {
    let temp = TempDir::new().unwrap();
    for key in ["first", "second"] {
        genzbot(temp.path())
            .args(["new", "bot", "-b", "gemini", "-k", key, "-y"])
            .assert()
            .success();
    }
    assert_eq!(
        read(temp.path().join("bot/.env")),
        "GOOGLE_API_KEY=\"second\"\n"
    );
}

#[test]
fn quiet_new_prints_nothing() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args(["-q", "new", "bot", "-b", "gemini", "-k", "k", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn json_new_reports_written_files() {
    let temp = TempDir::new().unwrap();
    let out = genzbot(temp.path())
        .args([
            "--output-format",
            "json",
            "new",
            "bot",
            "-b",
            "gemma",
            "-k",
            "k",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["backend"], "gemma");
    assert_eq!(report["template"], "plain");
    assert_eq!(report["files"].as_array().unwrap().len(), 7);
}

#[test]
fn config_file_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[defaults]\nbackend = \"llama\"\noutput_dir = \"from-config\"\n",
    )
    .unwrap();

    genzbot(temp.path())
        .env("GENZBOT__DEFAULTS__BOT_NAME", "EnvBot")
        .args(["new", "-k", "gsk_1", "-y"])
        .assert()
        .success();

    let root = temp.path().join("from-config");
    assert!(read(root.join(".env")).starts_with("LLAMA_API_KEY="));
    assert!(read(root.join("Frontend/templates/index.html")).contains("EnvBot"));
}

#[test]
fn malformed_config_exits_four() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[defaults\nbackend =").unwrap();

    genzbot(temp.path())
        .arg("list")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn run_on_an_empty_directory_exits_three() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("empty")).unwrap();

    genzbot(temp.path())
        .args(["run", "empty"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Missing project artifact"))
        .stderr(predicate::str::contains("genzbot new"));
}

#[test]
fn list_json_has_every_backend_and_template() {
    let temp = TempDir::new().unwrap();
    let out = genzbot(temp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let catalog: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let backends = catalog["backends"].as_array().unwrap();
    assert_eq!(backends.len(), 5);
    assert!(backends.iter().any(|b| b["credential_var"] == "MIXTRAL_API_KEY"));
    assert_eq!(catalog["templates"].as_array().unwrap().len(), 2);
}

#[test]
fn list_table_shows_models() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backends:"))
        .stdout(predicate::str::contains("llama3-8b-8192"))
        .stdout(predicate::str::contains("galaxy"));
}

#[test]
fn init_then_config_commands() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");

    genzbot(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(read(&config).contains("[defaults]"));

    genzbot(temp.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    genzbot(temp.path()).args(["init", "--force"]).assert().success();

    genzbot(temp.path())
        .args(["config", "get", "defaults.template"])
        .assert()
        .success()
        .stdout(predicate::str::diff("plain\n"));

    genzbot(temp.path())
        .args(["config", "get", "defaults.nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("defaults.backend"));

    genzbot(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    genzbot(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("genzbot"));
}

#[test]
fn log_file_receives_events() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("logs/genzbot.log");

    genzbot(temp.path())
        .args(["-v", "--log-file"])
        .arg(&log)
        .args(["new", "bot", "-b", "gemini", "-k", "k", "-y"])
        .assert()
        .success();

    assert!(read(&log).contains("Project created"));
}

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// `--format` for `git log` understood by [`super::parse_git_log`]
pub fn git_log_format() -> String {
    format!("--format={}%ad|%cd|%s", "@@commit")
}

#[fixture]
pub fn repository_dir() -> TempDir {
    init_repository()
}

/// Fresh git repository with a local identity and no signing
pub fn init_repository() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    run_git_command(dir.path(), &["init", "--quiet"])
        .assert()
        .success();
    for (key, value) in [
        ("user.name", "fake_user"),
        ("user.email", "fake_email@email.com"),
        ("commit.gpgsign", "false"),
    ] {
        run_git_command(dir.path(), &["config", key, value])
            .assert()
            .success();
    }

    dir
}

pub fn run_backfill_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("backfill").expect("Failed to find backfill binary");
    cmd.current_dir(dir);
    cmd.env("RUST_LOG", "warn");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Offline, push-free generation over `[start, end]`
pub fn backfill_generate(dir: &Path, start: &str, end: &str, seed: &str) -> Command {
    run_backfill_command(
        dir,
        &[
            "generate", "--start", start, "--end", end, "--seed", seed, "--offline", "--no-push",
        ],
    )
}

pub fn git_log(dir: &Path) -> String {
    let output = run_git_command(
        dir,
        &[
            "log",
            "--name-only",
            "--date=format:%Y-%m-%d %H:%M:%S",
            &git_log_format(),
        ],
    )
    .output()
    .expect("Failed to run git log");

    String::from_utf8(output.stdout).expect("git log output is not utf-8")
}

pub fn commit_count(dir: &Path) -> usize {
    let output = run_git_command(dir, &["rev-list", "--count", "HEAD"])
        .output()
        .expect("Failed to run git rev-list");

    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .unwrap_or(0)
}

// tests/integration_tests/common.rs
use anyhow::{Result, bail};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Runs git in `dir` with a throwaway identity and no user or system config.
pub fn git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(["-c", "commit.gpgsign=false"])
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_AUTHOR_NAME", "churn")
        .env("GIT_AUTHOR_EMAIL", "churn@example.com")
        .env("GIT_COMMITTER_NAME", "churn")
        .env("GIT_COMMITTER_EMAIL", "churn@example.com")
        .output()?;
    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}

pub fn init_repo() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    git(temp_dir.path(), &["init", "-q"])?;
    git(temp_dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    Ok(temp_dir)
}

/// Commits `times` separate edits to `name`.
pub fn commit_times(dir: &Path, name: &str, times: usize) -> Result<()> {
    for i in 0..times {
        create_test_file(dir, name, &format!("revision {i}\n"))?;
        git(dir, &["add", "--", name])?;
        git(dir, &["commit", "-q", "-m", &format!("edit {name} #{i}")])?;
    }
    Ok(())
}

/// A repository with `a.txt` changed 3 times, `b.txt` 7 times, and two
/// files under `build/` changed once each.
pub fn setup_test_repo() -> Result<TempDir> {
    let temp_dir = init_repo()?;
    let root = temp_dir.path();

    commit_times(root, "a.txt", 3)?;
    commit_times(root, "b.txt", 7)?;
    commit_times(root, "build/out.bin", 1)?;
    commit_times(root, "build/gen/schema.rs", 1)?;
    commit_times(root, "src/main.rs", 2)?;

    Ok(temp_dir)
}

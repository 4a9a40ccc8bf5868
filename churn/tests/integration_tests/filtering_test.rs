// tests/integration_tests/filtering_test.rs
use super::common::create_test_file;
use anyhow::Result;
use churn::{ChangeCounter, ChurnError, FilterSpec, Walker};
use std::io;
use std::path::Path;
use tempfile::TempDir;

/// Every file changed once; the walk is what is under test here.
struct OneEach;

impl ChangeCounter for OneEach {
    fn count_changes(&self, _path: &Path, _branch: &str) -> Result<u64, ChurnError> {
        Ok(1)
    }
}

fn scan(root: &Path, filters: &[&str]) -> Result<Vec<String>> {
    let walker = Walker::new(FilterSpec::new(filters)?, "main", OneEach);
    Ok(walker
        .walk(root, &mut io::sink())?
        .files()
        .iter()
        .map(|f| f.path.to_string_lossy().into_owned())
        .collect())
}

fn setup_tree() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    for name in [
        ".git/HEAD",
        ".git/objects/ab/cdef",
        "README.md",
        "build/out.bin",
        "build/gen/schema.rs",
        "docs/guide.md",
        "src/lib.rs",
        "src/generated/api.rs",
    ] {
        create_test_file(temp_dir.path(), name, "x")?;
    }
    Ok(temp_dir)
}

#[test]
fn test_git_metadata_never_scanned() -> Result<()> {
    let temp_dir = setup_tree()?;
    let files = scan(temp_dir.path(), &[])?;

    assert_eq!(files.len(), 6);
    assert!(files.iter().all(|f| !f.starts_with(".git")));
    Ok(())
}

#[test]
fn test_build_glob_leaves_siblings_alone() -> Result<()> {
    let temp_dir = setup_tree()?;
    let files = scan(temp_dir.path(), &["build/*"])?;

    assert!(files.iter().all(|f| !f.starts_with("build/")));
    assert_eq!(
        files,
        vec![
            "README.md",
            "docs/guide.md",
            "src/generated/api.rs",
            "src/lib.rs"
        ]
    );
    Ok(())
}

#[test]
fn test_directory_pattern_prunes_subtree() -> Result<()> {
    let temp_dir = setup_tree()?;
    let files = scan(temp_dir.path(), &["src/generated/", "docs"])?;

    assert_eq!(files, vec!["README.md", "build/gen/schema.rs", "build/out.bin", "src/lib.rs"]);
    Ok(())
}

#[test]
fn test_excluded_paths_never_appear() -> Result<()> {
    let temp_dir = setup_tree()?;
    let filters = ["*.md", "src/*/api.rs"];
    let spec = FilterSpec::new(filters)?;

    for file in scan(temp_dir.path(), &filters)? {
        assert!(!spec.matches(&file), "{file} should have been filtered");
    }
    Ok(())
}

#[test]
fn test_only_filtered_files_is_empty_scan() -> Result<()> {
    let temp_dir = setup_tree()?;
    let files = scan(temp_dir.path(), &["*"])?;
    assert!(files.is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_is_filtered() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt as _;

    let temp_dir = TempDir::new()?;
    let name = OsStr::from_bytes(b"bad\xffname");
    // Some filesystems refuse names that are not UTF-8.
    if std::fs::write(temp_dir.path().join(name), "x").is_err() {
        return Ok(());
    }
    create_test_file(temp_dir.path(), "ok.txt", "x")?;

    assert_eq!(scan(temp_dir.path(), &[])?.len(), 2);
    assert!(scan(temp_dir.path(), &["*"])?.is_empty());
    Ok(())
}

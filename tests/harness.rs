//! Test harness for dirwalk integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` pointing at `target`. The target is
    /// used verbatim, so relative targets make relative links.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        use std::os::unix::fs::symlink;

        let link_path = self.dir.path().join(link);
        symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }
}

/// Run the dirwalk binary in `dir` with the locale pinned to "C", so
/// sorted output is plain byte order.
pub fn run_dirwalk(dir: &Path, args: &[&str]) -> (String, String, bool) {
    run_dirwalk_env(dir, args, &[("LC_ALL", "C")])
}

/// Run the dirwalk binary in `dir` with explicit environment overrides.
pub fn run_dirwalk_env(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_dirwalk");
    let mut command = Command::new(binary);
    command.args(args).current_dir(dir);
    for (key, value) in envs {
        command.env(key, value);
    }
    let output = command.output().expect("Failed to run dirwalk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file_creates_parents() {
        let tree = TestTree::new();
        let file_path = tree.add_file("a/b/c.txt", "content");
        assert!(file_path.exists());
        assert!(tree.path().join("a/b").is_dir());
    }

    #[test]
    fn test_harness_add_dir() {
        let tree = TestTree::new();
        let dir_path = tree.add_dir("nested/dir");
        assert!(dir_path.is_dir());
    }

    #[test]
    #[cfg(unix)]
    fn test_harness_add_symlink() {
        let tree = TestTree::new();
        tree.add_file("target.txt", "x");
        let link = tree.add_symlink("target.txt", "link");
        assert!(link.symlink_metadata().unwrap().file_type().is_symlink());
    }
}

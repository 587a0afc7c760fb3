use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::process::Command as GitCommand;

/// Outcome of one git context capture.
///
/// `Unavailable` carries the failure reason so callers can decide how to
/// degrade instead of silently receiving an empty string.
#[derive(Debug)]
pub enum Capture {
    Available(String),
    Unavailable(String),
}

impl Capture {
    /// Degrade to empty text, warning with the capture's name when it failed.
    pub fn text_or_empty(self, what: &str) -> String {
        match self {
            Capture::Available(text) => text,
            Capture::Unavailable(reason) => {
                log::warn!("could not read {what}: {reason}");
                String::new()
            }
        }
    }
}

/// Reads commit context by shelling out to git inside a repository root.
pub struct GitCli {
    repo_root: PathBuf,
}

impl GitCli {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    /// Metadata + diff of the most recent commit (`git show HEAD`).
    pub fn head_commit(&self) -> Capture {
        self.capture(&["show", "HEAD"])
    }

    /// One-line summaries of the last five commits (`git log -5 --oneline`).
    pub fn recent_log(&self) -> Capture {
        self.capture(&["log", "-5", "--oneline"])
    }

    fn capture(&self, args: &[&str]) -> Capture {
        match self.git_output(args) {
            Ok(text) => Capture::Available(text),
            Err(err) => Capture::Unavailable(format!("{err:#}")),
        }
    }

    /// Run a git command and capture stdout as String.
    fn git_output(&self, args: &[&str]) -> Result<String> {
        let output = GitCommand::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .with_context(|| format!("failed to run git {:?}", args))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "git {:?} exited with status {:?}: {}",
                args,
                output.status.code(),
                stderr.trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

//! Containment of request targets inside the content root

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Reasons a target cannot be mapped under the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SandboxError {
    /// Target does not begin with `/`
    NotAbsolute,
    /// Target contains a NUL byte or a backslash
    InvalidComponent,
    /// Target climbs above the root, lexically or through a symlink
    Escape,
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SandboxError::NotAbsolute => "target is not an absolute path",
            SandboxError::InvalidComponent => "target contains an invalid path component",
            SandboxError::Escape => "target escapes the content root",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for SandboxError {}

/// Result of looking a located path up on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLookup {
    /// A regular, readable file; holds its canonical path
    File(PathBuf),
    /// Nothing servable at that path
    Missing,
    /// The path exists but resolves outside the root
    Escape,
}

/// The content root every target is resolved against.
#[derive(Debug, Clone)]
pub struct Sandbox {
    root: PathBuf,
}

impl Sandbox {
    /// Canonicalizes `root`. The directory must exist.
    pub fn new(root: impl AsRef<Path>) -> anyhow::Result<Self> {
        let root = root.as_ref();
        let canonical = std::fs::canonicalize(root)
            .with_context(|| format!("content root {} is not accessible", root.display()))?;

        if !canonical.is_dir() {
            anyhow::bail!("content root {} is not a directory", canonical.display());
        }

        Ok(Self { root: canonical })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps `target` to a path under the root without touching the disk.
    ///
    /// `.` segments and empty segments are dropped, `..` removes the
    /// previous segment.
    pub fn locate(&self, target: &str) -> Result<PathBuf, SandboxError> {
        let relative = target.strip_prefix('/').ok_or(SandboxError::NotAbsolute)?;

        let mut segments: Vec<&str> = Vec::new();
        for segment in relative.split('/') {
            if segment.contains(['\0', '\\']) {
                return Err(SandboxError::InvalidComponent);
            }
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop().ok_or(SandboxError::Escape)?;
                }
                other => segments.push(other),
            }
        }

        let mut path = self.root.clone();
        path.extend(segments);
        Ok(path)
    }

    /// Checks that `path` is a readable regular file whose canonical form
    /// is still inside the root.
    pub async fn lookup(&self, path: &Path) -> FileLookup {
        let canonical = match tokio::fs::canonicalize(path).await {
            Ok(canonical) => canonical,
            Err(_) => return FileLookup::Missing,
        };

        if !canonical.starts_with(&self.root) {
            return FileLookup::Escape;
        }

        match is_readable_file(&canonical).await {
            Ok(true) => FileLookup::File(canonical),
            _ => FileLookup::Missing,
        }
    }

    /// Path of a fixed document directly under the root.
    pub fn fallback(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

async fn is_readable_file(path: &Path) -> io::Result<bool> {
    let meta = tokio::fs::metadata(path).await?;
    if !meta.is_file() {
        return Ok(false);
    }
    tokio::fs::File::open(path).await?;
    Ok(true)
}

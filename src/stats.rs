//! Current size and rotated archives of each target, for `locyst stats`.

use crate::output::TargetFile;
use crate::rotation::archives;
use crate::size::format_size;
use std::path::{Path, PathBuf};

/// One rotated file next to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveInfo {
    pub path: PathBuf,
    pub size: u64,
}

/// Snapshot of one target and its archives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStats {
    pub path: PathBuf,
    /// `None` when the target does not exist right now.
    pub size: Option<u64>,
    /// Oldest first.
    pub archives: Vec<ArchiveInfo>,
}

impl TargetStats {
    /// Combined size of every archive.
    #[must_use]
    pub fn archived_size(&self) -> u64 {
        self.archives.iter().map(|a| a.size).sum()
    }

    /// Lines for terminal output.
    #[must_use]
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![match self.size {
            Some(size) => format!("{} ({})", self.path.display(), format_size(size)),
            None => format!("{} (missing)", self.path.display()),
        }];
        if self.archives.is_empty() {
            lines.push("  no archives".to_string());
        } else {
            lines.push(format!(
                "  {} archive(s), {}",
                self.archives.len(),
                format_size(self.archived_size())
            ));
            for archive in &self.archives {
                lines.push(format!(
                    "    {} ({})",
                    archive.path.display(),
                    format_size(archive.size)
                ));
            }
        }
        lines
    }
}

/// A target that does not exist reports `size: None`. An archive removed
/// between listing and reading is skipped.
///
/// # Errors
/// Directory listing and metadata failures other than not-found.
pub fn stats<P: AsRef<Path>>(targets: &[P]) -> Result<Vec<TargetStats>, crate::Error> {
    targets.iter().map(|target| target_stats(target.as_ref())).collect()
}

fn target_stats(path: &Path) -> Result<TargetStats, crate::Error> {
    let mut found = Vec::new();
    for archive in archives(path)? {
        if let Some(size) = TargetFile::new(&archive).size()? {
            found.push(ArchiveInfo {
                path: archive,
                size,
            });
        }
    }

    Ok(TargetStats {
        path: path.to_path_buf(),
        size: TargetFile::new(path).size()?,
        archives: found,
    })
}

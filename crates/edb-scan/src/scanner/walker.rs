//! The single directory-walk driver: visits entries depth-first,
//! classifying directories as it goes. Deliberately sequential — the
//! driver is the thing that acquires concurrency tokens before handing
//! files to workers, not a parallel walker in its own right.

use std::path::{Path, PathBuf};

use edb_core::errors::ScanError;
use edb_core::CancellationToken;
use globset::{Glob, GlobSet, GlobSetBuilder};

use super::types::{DirResult, DiscoveredFile};

const HARD_SKIP_DIRS: &[&str] = &["node_modules", "vendor", "dist", "build", ".git", ".nerd"];
const HIDDEN_ALLOW_LIST: &[&str] = &[".github", ".vscode", ".circleci", ".config"];

pub struct Walker {
    ignore_set: GlobSet,
}

impl Walker {
    pub fn new(ignore_patterns: &[String]) -> Result<Self, ScanError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in ignore_patterns {
            let glob = Glob::new(pattern).map_err(|source| ScanError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let ignore_set = builder
            .build()
            .map_err(|source| ScanError::InvalidIgnorePattern {
                pattern: ignore_patterns.join(","),
                source,
            })?;
        Ok(Self { ignore_set })
    }

    fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        let basename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if self.ignore_set.is_match(basename) {
            return true;
        }
        if let Ok(rel) = path.strip_prefix(root) {
            if self.ignore_set.is_match(rel) {
                return true;
            }
        }
        false
    }

    fn classify_dir(&self, root: &Path, path: &Path, basename: &str) -> DirVerdict {
        if HARD_SKIP_DIRS.contains(&basename) {
            return DirVerdict::Skip;
        }
        if let Some(rest) = basename.strip_prefix('.') {
            if !rest.is_empty() && !HIDDEN_ALLOW_LIST.contains(&basename) {
                return DirVerdict::Skip;
            }
        }
        if self.is_ignored(root, path) {
            return DirVerdict::Skip;
        }
        DirVerdict::Descend
    }

    /// Walks `root` depth-first, invoking `on_file` for every eligible file
    /// and `on_dir` for every descended directory, checking `cancel` at
    /// each directory step. Returns once the whole tree has been visited
    /// or cancellation is observed.
    pub fn walk(
        &self,
        root: &Path,
        follow_symlinks: bool,
        cancel: &CancellationToken,
        mut on_dir: impl FnMut(DirResult),
        mut on_file: impl FnMut(DiscoveredFile),
    ) -> Result<(), ScanError> {
        if !root.exists() {
            return Err(ScanError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(ScanError::RootNotADirectory {
                path: root.to_path_buf(),
            });
        }
        on_dir(DirResult {
            path: root.to_path_buf(),
            basename: root
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
        });
        self.walk_dir(root, root, follow_symlinks, cancel, &mut on_dir, &mut on_file)
    }

    fn walk_dir(
        &self,
        root: &Path,
        dir: &Path,
        follow_symlinks: bool,
        cancel: &CancellationToken,
        on_dir: &mut impl FnMut(DirResult),
        on_file: &mut impl FnMut(DiscoveredFile),
    ) -> Result<(), ScanError> {
        if cancel.is_cancelled() {
            return Ok(());
        }

        let read_dir = std::fs::read_dir(dir).map_err(|source| ScanError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut entries: Vec<PathBuf> = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| ScanError::DirectoryRead {
                path: dir.to_path_buf(),
                source,
            })?;
            entries.push(entry.path());
        }
        entries.sort();

        for path in entries {
            if cancel.is_cancelled() {
                return Ok(());
            }

            let metadata = if follow_symlinks {
                std::fs::metadata(&path)
            } else {
                std::fs::symlink_metadata(&path)
            };
            let Ok(metadata) = metadata else { continue };

            if metadata.is_dir() {
                let basename = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
                    .to_string();
                match self.classify_dir(root, &path, &basename) {
                    DirVerdict::Skip => continue,
                    DirVerdict::Descend => {
                        on_dir(DirResult {
                            path: path.clone(),
                            basename,
                        });
                        self.walk_dir(root, &path, follow_symlinks, cancel, on_dir, on_file)?;
                    }
                }
            } else if metadata.is_file() {
                if self.is_ignored(root, &path) {
                    continue;
                }
                let mtime = metadata.modified().unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                on_file(DiscoveredFile {
                    path,
                    size: metadata.len(),
                    mtime,
                });
            }
        }

        Ok(())
    }
}

enum DirVerdict {
    Skip,
    Descend,
}

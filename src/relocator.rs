/// Guarded file relocation primitives.
///
/// This module provides the single move operation the whole restoration is
/// built from: a root-relative source either does not exist (the move is
/// silently skipped) or is moved onto a root-relative destination, replacing
/// any plain file already there. It also owns the crate's error type.
use std::fs;
use std::path::{Path, PathBuf};

/// Records a single performed relocation.
///
/// Paths are kept root-relative, matching how moves are reported on stdout
/// and recorded in the restore history.
#[derive(Debug, Clone)]
pub struct Relocation {
    /// Root-relative name the file had before the move.
    pub source: PathBuf,
    /// Root-relative path the file was moved to.
    pub destination: PathBuf,
}

/// Errors that can occur while restoring the project tree.
#[derive(Debug)]
pub enum RestoreError {
    /// Failed to create a destination directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to remove the plain file occupying a destination.
    OverwriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The destination is an existing directory, which is never replaced.
    DestinationIsDirectory {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Failed to move a file to its destination.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
    /// Failed to list the root directory for a prefix scan.
    RootListingFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the restore history file.
    HistoryWriteFailed { source: std::io::Error },
    /// Failed to read the restore history file.
    HistoryReadFailed { source: std::io::Error },
    /// The restore history file has an invalid format.
    InvalidHistoryFormat { reason: String },
}

impl std::fmt::Display for RestoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::OverwriteFailed { path, source } => {
                write!(
                    f,
                    "Failed to replace existing file {}: {}",
                    path.display(),
                    source
                )
            }
            Self::DestinationIsDirectory {
                source,
                destination,
            } => {
                write!(
                    f,
                    "Cannot move {} to {}: destination is a directory",
                    source.display(),
                    destination.display()
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::RootListingFailed { path, source } => {
                write!(
                    f,
                    "Failed to list root directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::HistoryWriteFailed { source } => {
                write!(f, "Failed to write restore history: {}", source)
            }
            Self::HistoryReadFailed { source } => {
                write!(f, "Failed to read restore history: {}", source)
            }
            Self::InvalidHistoryFormat { reason } => {
                write!(f, "Invalid restore history format: {}", reason)
            }
        }
    }
}

impl std::error::Error for RestoreError {}

/// Result type for restoration operations.
pub type RestoreResult<T> = Result<T, RestoreError>;

/// Moves root files onto their destinations in the restored tree.
pub struct Relocator;

impl Relocator {
    /// Creates a directory and all missing ancestors.
    ///
    /// Succeeds without touching anything if the directory already exists.
    pub fn ensure_dir(path: &Path) -> RestoreResult<()> {
        fs::create_dir_all(path).map_err(|e| RestoreError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Moves a root-relative source onto a root-relative destination.
    ///
    /// If the source does not exist the move is skipped and `Ok(None)` is
    /// returned; a file that was never present, or was already moved by an
    /// earlier run, is not an error. Otherwise the destination's parent
    /// directory is created as needed, a plain file already at the
    /// destination is deleted, and the source is renamed into place.
    ///
    /// An existing directory at the destination is never removed; that case
    /// fails with [`RestoreError::DestinationIsDirectory`].
    ///
    /// # Arguments
    ///
    /// * `root` - The directory all relative paths are resolved against
    /// * `src_name` - Root-relative name of the file to move
    /// * `dest_rel` - Root-relative destination path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kotapal_restore::relocator::Relocator;
    /// use std::path::Path;
    ///
    /// let result = Relocator::relocate(Path::new("/project"), "README.md", "docs/README.md");
    /// match result {
    ///     Ok(Some(op)) => println!("Moved {} -> {}", op.source.display(), op.destination.display()),
    ///     Ok(None) => println!("Nothing to do"),
    ///     Err(e) => eprintln!("Restore failed: {}", e),
    /// }
    /// ```
    pub fn relocate(
        root: &Path,
        src_name: &str,
        dest_rel: &str,
    ) -> RestoreResult<Option<Relocation>> {
        let src_path = root.join(src_name);
        if !src_path.exists() {
            return Ok(None);
        }

        let dest_path = root.join(dest_rel);
        if let Some(parent) = dest_path.parent() {
            Self::ensure_dir(parent)?;
        }

        if dest_path.is_dir() {
            return Err(RestoreError::DestinationIsDirectory {
                source: PathBuf::from(src_name),
                destination: PathBuf::from(dest_rel),
            });
        }

        if dest_path.is_file() {
            fs::remove_file(&dest_path).map_err(|e| RestoreError::OverwriteFailed {
                path: dest_path.clone(),
                source: e,
            })?;
        }

        fs::rename(&src_path, &dest_path).map_err(|e| RestoreError::FileMoveFailure {
            source: src_path.clone(),
            destination: dest_path.clone(),
            source_error: e,
        })?;

        Ok(Some(Relocation {
            source: PathBuf::from(src_name),
            destination: PathBuf::from(dest_rel),
        }))
    }
}

//! End-to-end restoration procedure.
//!
//! Walks the static tables in [`crate::layout`] phase by phase, runs the two
//! prefix scans over the root, performs the index-page swap, and finally
//! writes the restore history. Every step is a guarded move: a source that
//! is absent (never present, or already moved by an earlier run) is skipped,
//! so a completed run is safe to repeat.

use crate::history::RestoreLog;
use crate::layout;
use crate::output::OutputFormatter;
use crate::prefix;
use crate::relocator::{Relocator, RestoreError, RestoreResult};
use std::fs;
use std::path::Path;

/// Restores the project tree rooted at `root`.
///
/// Phases run in a fixed order: destination directories, documentation,
/// archived launchers, backend sources, individually mapped assets, the
/// `KOTAPAL_` scan, the `FRONTEND_SRC_` scan, and the index-page swap.
/// The first filesystem failure aborts the remaining moves.
///
/// # Examples
///
/// ```no_run
/// use kotapal_restore::restore::run_restore;
/// use std::path::Path;
///
/// if let Err(e) = run_restore(Path::new("/path/to/project")) {
///     eprintln!("Restore failed: {}", e);
/// }
/// ```
pub fn run_restore(root: &Path) -> RestoreResult<()> {
    OutputFormatter::info(&format!(
        "Restoring project structure under: {}",
        root.display()
    ));

    for dir in layout::DIRECTORIES {
        Relocator::ensure_dir(&root.join(dir))?;
    }

    let mut log = RestoreLog::new(root);

    for &name in layout::DOC_FILES {
        move_and_report(root, name, &format!("docs/{}", name), &mut log)?;
    }

    for &name in layout::ARCHIVE_FILES {
        move_and_report(root, name, &format!("archive/{}", name), &mut log)?;
    }

    for &name in layout::BACKEND_FILES {
        move_and_report(root, name, &format!("src/{}", name), &mut log)?;
    }

    for &(source, destination) in layout::ASSET_MOVES {
        move_and_report(root, source, destination, &mut log)?;
    }

    relocate_by_prefix(root, prefix::kotapal_destination, &mut log)?;
    relocate_by_prefix(root, prefix::frontend_src_destination, &mut log)?;

    swap_index_files(root, &mut log)?;

    if !log.is_empty()
        && let Err(e) = log.save(root)
    {
        OutputFormatter::warning(&format!("Could not save restore history: {}", e));
    }

    OutputFormatter::success("Restoration complete.");
    Ok(())
}

/// Performs one guarded move, reporting and recording it if it happened.
fn move_and_report(
    root: &Path,
    src_name: &str,
    dest_rel: &str,
    log: &mut RestoreLog,
) -> RestoreResult<()> {
    if let Some(relocation) = Relocator::relocate(root, src_name, dest_rel)? {
        OutputFormatter::moved(src_name, dest_rel);
        log.record(&relocation);
    }
    Ok(())
}

/// Relocates every root entry whose name the mapping recognizes.
///
/// The root listing is snapshotted once, so a scan never sees a name twice;
/// the snapshot is sorted to keep the move order deterministic.
fn relocate_by_prefix<F>(root: &Path, destination_for: F, log: &mut RestoreLog) -> RestoreResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    for name in snapshot_root(root)? {
        if let Some(dest_rel) = destination_for(&name) {
            move_and_report(root, &name, &dest_rel, log)?;
        }
    }
    Ok(())
}

/// Takes a sorted snapshot of the entry names in the root directory.
fn snapshot_root(root: &Path) -> RestoreResult<Vec<String>> {
    let entries = fs::read_dir(root).map_err(|e| RestoreError::RootListingFailed {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    Ok(names)
}

/// Rotates the index pages so the React entry point takes over the root.
///
/// The original `index.html` is parked under a temporary name before the
/// React page moves in, then renamed to its final archived name. Skipped
/// entirely unless `react-app-index.html` is present, which also makes a
/// repeat run after success a no-op. If the process dies mid-rotation the
/// temporary name survives and the rotation can be finished by hand.
fn swap_index_files(root: &Path, log: &mut RestoreLog) -> RestoreResult<()> {
    if !root.join(layout::REACT_INDEX).exists() {
        return Ok(());
    }

    move_and_report(root, layout::ROOT_INDEX, layout::ARCHIVED_INDEX_TEMP, log)?;
    move_and_report(root, layout::REACT_INDEX, layout::ROOT_INDEX, log)?;
    move_and_report(root, layout::ARCHIVED_INDEX_TEMP, layout::ARCHIVED_INDEX, log)?;
    Ok(())
}

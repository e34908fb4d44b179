//! Destination mapping for prefix-named root files.
//!
//! Two legacy naming conventions flattened the tree into the root directory:
//! `KOTAPAL_<rest>` for files belonging to the archived "KotaPal simple"
//! prototype, and `FRONTEND_SRC_<rest>` for React sources, where underscores
//! in `<rest>` stand in for path separators. These functions derive the
//! restored path from a bare filename, or return `None` for names outside
//! the convention.

/// Prefix marking files archived from the "KotaPal simple" prototype.
pub const KOTAPAL_PREFIX: &str = "KOTAPAL_";

/// Prefix marking flattened React source files.
pub const FRONTEND_SRC_PREFIX: &str = "FRONTEND_SRC_";

/// Maps a `KOTAPAL_`-prefixed name to its archive destination.
///
/// The prefix is stripped and the remainder is used verbatim as a filename
/// under `archive/KotaPal simple/`; underscores in the remainder are kept.
///
/// # Examples
///
/// ```
/// use kotapal_restore::prefix::kotapal_destination;
///
/// assert_eq!(
///     kotapal_destination("KOTAPAL_foo.txt").as_deref(),
///     Some("archive/KotaPal simple/foo.txt")
/// );
/// assert_eq!(kotapal_destination("notes.txt"), None);
/// ```
pub fn kotapal_destination(name: &str) -> Option<String> {
    let rest = name.strip_prefix(KOTAPAL_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(format!("archive/KotaPal simple/{}", rest))
}

/// Maps a `FRONTEND_SRC_`-prefixed name to its place under `frontend/src/`.
///
/// The prefix is stripped and every underscore-delimited segment of the
/// remainder becomes a path component, reconstructing the directory depth
/// that flattening erased.
///
/// # Examples
///
/// ```
/// use kotapal_restore::prefix::frontend_src_destination;
///
/// assert_eq!(
///     frontend_src_destination("FRONTEND_SRC_components_Button.js").as_deref(),
///     Some("frontend/src/components/Button.js")
/// );
/// ```
pub fn frontend_src_destination(name: &str) -> Option<String> {
    let rest = name.strip_prefix(FRONTEND_SRC_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    let relative = rest.split('_').collect::<Vec<_>>().join("/");
    Some(format!("frontend/src/{}", relative))
}

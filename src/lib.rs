//! kotapal-restore - a one-shot cleanup of the KotaPal project tree
//!
//! This library restores a flat legacy directory of loosely-named files into
//! the project's nested folder layout: hardcoded filename lists route
//! documentation, launcher scripts and backend sources to their homes,
//! prefix conventions (`KOTAPAL_`, `FRONTEND_SRC_`) rebuild the archived
//! prototype and the React source tree, and a three-way rename installs the
//! React entry point as the root index page.

pub mod history;
pub mod layout;
pub mod output;
pub mod prefix;
pub mod relocator;
pub mod restore;

pub use history::{RelocationRecord, RestoreLog};
pub use relocator::{Relocation, Relocator, RestoreError, RestoreResult};

pub use restore::run_restore;

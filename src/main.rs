use kotapal_restore::output::OutputFormatter;
use kotapal_restore::restore::run_restore;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

/// The root is the directory containing this executable, not the process's
/// working directory; the tool is dropped into the project folder it is
/// meant to reorganize.
fn resolve_root() -> Result<PathBuf, String> {
    let exe = env::current_exe().map_err(|e| format!("Could not locate this executable: {}", e))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| "Executable has no containing directory".to_string())
}

fn main() {
    let root = match resolve_root() {
        Ok(root) => root,
        Err(e) => {
            OutputFormatter::error(&e);
            process::exit(1);
        }
    };

    if let Err(e) = run_restore(&root) {
        OutputFormatter::error(&format!("{}", e));
        process::exit(1);
    }
}

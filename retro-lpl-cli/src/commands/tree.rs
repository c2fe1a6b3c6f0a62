use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_lpl_lib::tree::write_tree;

use crate::error::CliError;

/// Write the directory listing for `root` (or the configured `tree_root`).
pub(crate) fn run_tree(
    config_path: &Path,
    root: Option<PathBuf>,
    output: &Path,
) -> Result<(), CliError> {
    let root = match root {
        Some(root) => root,
        None => super::load(config_path)?
            .tree_root
            .ok_or_else(|| CliError::other("No root given and no tree_root in config"))?,
    };

    let lines = write_tree(&root, output)?;
    log::info!(
        "Listed {} ({} lines) into {}",
        root.display().if_supports_color(Stdout, |t| t.cyan()),
        lines,
        output.display().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_lpl_lib::CollectionKind;

use crate::error::CliError;

/// Print the config file path and whether it exists.
pub(crate) fn run_config_path(config_path: &Path) {
    let status = if config_path.exists() {
        format!("{}", "(exists)".if_supports_color(Stdout, |t| t.green()))
    } else {
        format!("{}", "(not found)".if_supports_color(Stdout, |t| t.dimmed()))
    };
    log::info!(
        "{} {}",
        config_path.display().if_supports_color(Stdout, |t| t.cyan()),
        status
    );
}

/// List the configured collections.
pub(crate) fn run_config_show(config_path: &Path) -> Result<(), CliError> {
    let config = super::load(config_path)?;
    let collections = config.collections()?;

    log::info!(
        "{} ({})",
        "Collections".if_supports_color(Stdout, |t| t.bold()),
        collections.len()
    );
    log::info!("");

    for collection in &collections {
        log::info!(
            "  {} [{}]",
            collection.name.if_supports_color(Stdout, |t| t.bold()),
            collection.path_style.if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("    Source: {}", collection.source.display());
        log::info!("    Output: {}", collection.output.display());
        if !collection.extensions.is_empty() {
            log::info!("    Extensions: {}", collection.extensions.join(", "));
        }
        if collection.recursive {
            log::info!("    Recursive: yes");
        }
        log::info!("    Core: {}", collection.core);
        if let CollectionKind::Arcade { dat_file, denylist } = &collection.kind {
            log::info!("    DAT: {}", dat_file.display());
            if !denylist.is_empty() {
                log::info!("    Denylist: {}", denylist.join(", "));
            }
        }
    }

    log::info!("");
    log::info!(
        "Portable roots: {} / {}",
        config.portable.source_root,
        config.portable.output_dir.display()
    );
    Ok(())
}

use std::io::{BufRead, Write};
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_lpl_lib::{Collection, PathStyle, RetroArch, generate_playlist};

use crate::cli_types::GenerateArgs;
use crate::error::CliError;

/// Generate every configured playlist.
pub(crate) fn run_generate(config_path: &Path, args: GenerateArgs) -> Result<(), CliError> {
    let config = super::load(config_path)?;
    let mut collections = select(config.collections()?, args.only.as_deref())?;

    if args.portable {
        for collection in &mut collections {
            collection.set_path_style(PathStyle::Portable);
        }
        log::info!(
            "{} Portable path mode activated.",
            "[INFO]".if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("");
    }

    if collections.is_empty() {
        log::warn!("No collections configured in {}", config_path.display());
    }

    let frontend = RetroArch::new();
    let total = collections.len();
    let mut failed = 0;

    for collection in &collections {
        match generate_playlist(collection, &config.portable, &frontend) {
            Ok(summary) => {
                log::debug!("{} -> {}", summary.name, summary.path.display());
            }
            Err(e) => {
                failed += 1;
                log::error!("{}: {}", collection.name, e);
            }
        }
    }

    log::info!("");
    if failed == 0 {
        log::info!(
            "{} Playlist(s) successfully created or updated.",
            "[Done]".if_supports_color(Stdout, |t| t.green()),
        );
    }

    if !args.no_pause {
        wait_for_enter()?;
    }

    if failed > 0 {
        return Err(CliError::Generate { failed, total });
    }
    Ok(())
}

/// Keep only the collections named in `only`, preserving config order.
fn select(collections: Vec<Collection>, only: Option<&[String]>) -> Result<Vec<Collection>, CliError> {
    let Some(only) = only else {
        return Ok(collections);
    };

    for name in only {
        if !collections.iter().any(|c| &c.name == name) {
            return Err(CliError::other(format!("Unknown collection: {name}")));
        }
    }

    Ok(collections
        .into_iter()
        .filter(|c| only.contains(&c.name))
        .collect())
}

fn wait_for_enter() -> Result<(), CliError> {
    print!(" Press [ENTER] to exit.");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

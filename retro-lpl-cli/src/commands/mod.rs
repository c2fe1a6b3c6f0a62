pub(crate) mod config;
pub(crate) mod generate;
pub(crate) mod tree;

use std::path::Path;

use retro_lpl_lib::Config;
use retro_lpl_lib::settings::load_config;

use crate::error::CliError;

/// Load the config file, logging which one is used.
pub(crate) fn load(config_path: &Path) -> Result<Config, CliError> {
    log::debug!("Using config {}", config_path.display());
    Ok(load_config(config_path)?)
}

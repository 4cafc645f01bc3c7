use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use postfeed::config::{read_config, Config};

use crate::CFG_FILE_NAME;

/// Executable dir, then current dir, then the user config dir
fn config_search_dirs() -> Vec<Option<PathBuf>> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir().map(|dir| dir.join("postfeed"));

    vec![exe_dir, cur_dir, cfg_dir]
}

fn find_config(search_dirs: Vec<Option<PathBuf>>) -> Option<PathBuf> {
    search_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

// Diagnostics go to stderr, stdout may be carrying the feed
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let config_path = match cfg_path {
        Some(path) => path,
        None => find_config(config_search_dirs())
            .ok_or_else(|| anyhow!("Could not find {}. Please run postfeed init-config", CFG_FILE_NAME))?,
    };

    eprintln!("Reading config from {}", config_path.display());
    let mut config = read_config(&config_path)
        .with_context(|| format!("Loading {}", config_path.display()))?;

    if let Some(mut log) = config.log {
        if log.location.is_none() {
            log.location = dirs::cache_dir().map(|dir| dir.join("postfeed").join("log").join("build.log"));
        }
        if let Some(ref location) = log.location {
            eprintln!("Log enabled. Files will be written in {}", location.display());
        }
        config.log = Some(log);
    }

    Ok(config)
}

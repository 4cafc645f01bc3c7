use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, io};
use std::fs;

use serde::Deserialize;

use crate::feed_renderer::LineFormat;

#[derive(Deserialize)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub drafts_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Deserialize, Default)]
pub struct Feed {
    #[serde(default)]
    pub format: LineFormat,
    #[serde(default)]
    pub include_drafts: bool,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    #[serde(default)]
    pub feed: Feed,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    let Some(str_path) = path.to_str() else {
        return Ok(path);
    };

    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe()?;
        let exe_dir = cur_exe.parent()
            .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Executable directory not found"))?;
        Ok(PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())))
    } else {
        Ok(path)
    }
}

fn parse_opt_path(path: Option<PathBuf>) -> io::Result<Option<PathBuf>> {
    path.map(parse_path).transpose()
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    let Config { paths, feed, log } = cfg;
    let paths = Paths {
        posts_dir: parse_path(paths.posts_dir)?,
        drafts_dir: parse_opt_path(paths.drafts_dir)?,
        template: parse_opt_path(paths.template)?,
        output: parse_opt_path(paths.output)?,
    };

    Ok(Config { paths, feed, log })
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use postfeed::feed_renderer::LineFormat;

use crate::build::build_cmd;
use crate::config_data::init_config_cmd;

mod build;
mod config;
mod config_data;

const CFG_FILE_NAME: &str = "postfeed.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Renders the post feed
    Build(BuildArgs),
    /// Writes a sample configuration file
    InitConfig(InitConfigArgs),
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct BuildArgs {
    /// Config path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Overrides the line format from the configuration
    #[arg(short, long)]
    format: Option<FormatArg>,

    /// Includes the posts in the drafts directory
    #[arg(short, long)]
    drafts: bool,

    /// Overrides the output file from the configuration
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct InitConfigArgs {
    /// File the sample configuration is written to
    #[arg(short, long, default_value = CFG_FILE_NAME)]
    out_file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    /// [title](url)
    Markdown,
    /// <a href="url">title</a>
    Html,
}

impl From<FormatArg> for LineFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Markdown => LineFormat::Markdown,
            FormatArg::Html => LineFormat::Html,
        }
    }
}

impl Display for FormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatArg::Markdown => write!(f, "markdown"),
            FormatArg::Html => write!(f, "html"),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args {
        Args::Build(args) => build_cmd(args),
        Args::InitConfig(args) => init_config_cmd(args),
    }
}

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use spdlog::{error, info, warn};

use postfeed::config::Config;
use postfeed::content::PostList;
use postfeed::feed_renderer::{FeedRenderer, LineFormat};
use postfeed::logger::{configure_logger, use_console_logger};
use postfeed::view::index_renderer::IndexRenderer;

use crate::config::open_config;
use crate::BuildArgs;

struct BuildOptions {
    format: LineFormat,
    include_drafts: bool,
}

impl BuildOptions {
    fn from(config: &Config, args: &BuildArgs) -> Self {
        BuildOptions {
            format: args.format.map(LineFormat::from).unwrap_or(config.feed.format),
            include_drafts: args.drafts || config.feed.include_drafts,
        }
    }
}

fn render_feed(config: &Config, options: &BuildOptions) -> Result<String> {
    let post_list = PostList {
        posts_dir: config.paths.posts_dir.clone(),
        drafts_dir: config.paths.drafts_dir.clone(),
    };

    let records = post_list.retrieve_records(options.include_drafts)?;
    let renderer = FeedRenderer::new(options.format);
    let lines = renderer.render_records(records)?;
    info!("Rendered {} feed lines", lines.len());

    match config.paths.template {
        Some(ref template) => {
            let tpl_src = fs::read_to_string(template)
                .with_context(|| format!("Reading template {}", template.display()))?;
            let index_renderer = IndexRenderer::new(&tpl_src)?;
            Ok(index_renderer.render(&lines))
        }
        None => {
            let mut feed = lines.join("\n");
            if !feed.is_empty() {
                feed.push('\n');
            }
            Ok(feed)
        }
    }
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Creating {}", parent.display()))?;
                }
            }
            fs::write(path, rendered)
                .with_context(|| format!("Writing {}", path.display()))?;
            info!("Feed written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn build_cmd(args: BuildArgs) -> Result<()> {
    let config = open_config(args.config_path.clone())?;

    if let Err(err) = configure_logger(&config) {
        if let Err(console_err) = use_console_logger() {
            eprintln!("Error creating console logger: {}", console_err);
        }
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let options = BuildOptions::from(&config, &args);
    let output = args.output.as_deref().or(config.paths.output.as_deref());

    let rendered = match render_feed(&config, &options) {
        Ok(rendered) => rendered,
        Err(err) => {
            error!("Build failed: {:#}", err);
            return Err(err);
        }
    };

    write_output(output, &rendered)
}

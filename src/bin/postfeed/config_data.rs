use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::InitConfigArgs;

fn get_sample_cfg() -> &'static str {
    include_str!("../../../postfeed.toml")
}

fn write_sample_cfg(file_path: &Path) -> Result<()> {
    if file_path.exists() {
        bail!("{} already exists", file_path.display());
    }

    let file = File::create(file_path)
        .with_context(|| format!("Creating {}", file_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(get_sample_cfg().as_bytes())?;
    writer.flush()?;

    Ok(())
}

pub fn init_config_cmd(args: InitConfigArgs) -> Result<()> {
    write_sample_cfg(&args.out_file)?;
    println!("Sample configuration written to {}", args.out_file.display());
    Ok(())
}

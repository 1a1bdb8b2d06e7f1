use pdf2img::configuration::factories::{config_loader, config_resolver, converter};
use pdf2img::configuration::telemetry::init_tracing;
use pdf2img::BinaryFile;

use anyhow::{anyhow, bail, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const USAGE: &str = "usage: pdf2img <input.pdf> [output-dir]";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let mut args = env::args().skip(1);
    let input = PathBuf::from(args.next().ok_or_else(|| anyhow!(USAGE))?);
    let output_dir = args.next().map_or_else(|| parent_dir(&input), PathBuf::from);

    run(&input, &output_dir).await
}

#[instrument]
async fn run(input: &Path, output_dir: &Path) -> Result<()> {
    let path_override = env::var("PDF2IMG_CONFIG_PATH").ok().map(PathBuf::from);
    let cfg = config_resolver(config_loader()).handle_config(path_override)?;
    debug!("using config: {:?}", cfg);

    let res = converter(&cfg).convert(&BinaryFile::from_path(input)).await;
    if let Some(e) = res.error {
        bail!(e);
    }
    let image = res.file.ok_or_else(|| anyhow!("conversion produced no image"))?;
    let content = image
        .memory()
        .ok_or_else(|| anyhow!("image '{}' isn't held in memory", image.name()))?;

    tokio::fs::create_dir_all(output_dir).await?;
    let output = output_dir.join(image.name());
    tokio::fs::write(&output, content).await?;
    info!("written '{}'", output.display());
    println!("{}", output.display());

    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

use std::{
    fs,
    fs::File,
    io,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use vk_dispatch_gen::{scan, table, HeaderGenerator, SourceGenerator};

/// Generates the Vulkan dispatch table glue from the embedded command registry.
#[derive(Parser)]
#[command(name = "vkdt")]
struct Cli {
    /// `scan` to reconstruct the registry from a header, otherwise the path of
    /// the artifact to generate (`.h` or `.cpp`)
    target: String,

    /// Header to scan (scan mode only)
    header: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.target == "scan" {
        let path = cli.header.context("scan mode expects a header path")?;
        return scan_header(&path);
    }

    generate(Path::new(&cli.target))
}

/// Prints the registry reconstructed from `path` as table literals.
fn scan_header(path: &Path) -> Result<()> {
    let src = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let registry = scan::parse_header(&src);
    info!("scanned {} extension groups from {}", registry.extensions.len(), path.display());

    let stdout = io::stdout();
    scan::write_literals(&registry, &mut stdout.lock())?;
    Ok(())
}

/// Writes the artifact selected by the suffix of `path`, overwriting it.
fn generate(path: &Path) -> Result<()> {
    let base = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("output path {} has no file name", path.display()))?;

    if !base.ends_with(".h") && !base.ends_with(".cpp") {
        bail!("output file name must end in .h or .cpp, got {}", base);
    }

    let mut file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;

    if base.ends_with(".h") {
        table::VULKAN.write_bindings(HeaderGenerator::new(base), &mut file)?;
    } else {
        // the source includes the header it was generated alongside
        table::VULKAN.write_bindings(SourceGenerator::new(&base.replace(".cpp", ".h")), &mut file)?;
    }

    info!("wrote {}", path.display());
    Ok(())
}

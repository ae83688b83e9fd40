use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tubulin_core::io::image_io::{load_cell_image, save_mask_png, save_overlay_png};
use tubulin_core::quantify::quantify;

use super::QuantifyOpts;
use crate::summary::print_record;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input cell image (PNG/JPG/TIFF)
    pub image: PathBuf,

    /// Directory for diagnostic images
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Skip writing diagnostic images
    #[arg(long)]
    pub no_diagnostics: bool,

    #[command(flatten)]
    pub quantify: QuantifyOpts,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = args.quantify.resolve()?;
    let name = image_stem(&args.image);

    let image = load_cell_image(&args.image)
        .with_context(|| format!("loading {}", args.image.display()))?;
    let result = quantify(&image, &name, &config)?;

    print_record(&result.record, &config);

    if !args.no_diagnostics {
        std::fs::create_dir_all(&args.output)?;
        save_mask_png(
            &result.nucleus_mask,
            &args.output.join(format!("{name}_nucleus.png")),
        )?;
        save_mask_png(
            &result.foreground_mask,
            &args.output.join(format!("{name}_foreground.png")),
        )?;
        save_mask_png(&result.final_mask, &args.output.join(format!("{name}_mask.png")))?;
        save_overlay_png(
            &image,
            &result.final_mask,
            &args.output.join(format!("{name}_overlay.png")),
        )?;
        println!("Diagnostics written to {}", args.output.display());
    }

    Ok(())
}

/// File stem used as the image identifier in records and output names.
pub(crate) fn image_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

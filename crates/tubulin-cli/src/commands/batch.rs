use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;
use tubulin_core::io::image_io::{load_cell_image, save_mask_png, save_overlay_png};
use tubulin_core::quantify::{quantify, QuantificationRecord, QuantifyConfig};

use super::analyze::image_stem;
use super::QuantifyOpts;
use crate::metadata::{load_metadata, MetadataRow};
use crate::summary::print_batch_summary;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tif", "tiff"];

#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing cropped cell images
    pub input: PathBuf,

    /// Output directory for the results CSV and diagnostics
    #[arg(short, long, default_value = "results")]
    pub output: PathBuf,

    /// CSV with image_name,condition,dose,include_in_curve columns
    #[arg(short, long)]
    pub metadata: Option<PathBuf>,

    /// Skip writing per-image diagnostic images
    #[arg(long)]
    pub no_diagnostics: bool,

    #[command(flatten)]
    pub quantify: QuantifyOpts,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let config = args.quantify.resolve()?;
    let files = collect_image_files(&args.input)?;
    if files.is_empty() {
        println!("No images found in {}", args.input.display());
        return Ok(());
    }

    std::fs::create_dir_all(&args.output)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Quantifying");

    // Images are independent; one worker per image needs no coordination.
    let records: Vec<QuantificationRecord> = files
        .par_iter()
        .filter_map(|path| {
            let record = process_one(path, &config, &args.output, args.no_diagnostics);
            pb.inc(1);
            match record {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(image = %path.display(), error = %err, "Skipping image");
                    None
                }
            }
        })
        .collect();
    pb.finish_with_message("Done");

    let metadata = match &args.metadata {
        Some(path) => {
            Some(load_metadata(path).with_context(|| format!("reading {}", path.display()))?)
        }
        None => None,
    };

    let csv_path = args.output.join("quantification_results.csv");
    write_results_csv(&csv_path, &records, metadata.as_ref())?;

    print_batch_summary(&records, files.len(), &csv_path);
    Ok(())
}

fn process_one(
    path: &Path,
    config: &QuantifyConfig,
    output: &Path,
    no_diagnostics: bool,
) -> Result<QuantificationRecord> {
    let name = image_stem(path);
    let image = load_cell_image(path)?;
    let result = quantify(&image, &name, config)?;
    if !no_diagnostics {
        save_mask_png(&result.nucleus_mask, &output.join(format!("{name}_nucleus.png")))?;
        save_mask_png(&result.final_mask, &output.join(format!("{name}_mask.png")))?;
        save_overlay_png(&image, &result.final_mask, &output.join(format!("{name}_overlay.png")))?;
    }
    Ok(result.record)
}

/// All files in the directory with a recognized image extension,
/// case-insensitive, sorted by path.
fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let recognized = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if recognized {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn write_results_csv(
    path: &Path,
    records: &[QuantificationRecord],
    metadata: Option<&HashMap<String, MetadataRow>>,
) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    if metadata.is_some() {
        writeln!(
            out,
            "image_name,green_percentage,threshold_value,total_pixels,counted_pixels,condition,dose,include_in_curve"
        )?;
    } else {
        writeln!(
            out,
            "image_name,green_percentage,threshold_value,total_pixels,counted_pixels"
        )?;
    }

    for record in records {
        write!(
            out,
            "{},{:.4},{:.4},{},{}",
            record.image_name,
            record.percentage,
            record.threshold_value,
            record.total_pixels,
            record.counted_pixels
        )?;
        match metadata {
            Some(meta) => match meta.get(&record.image_name) {
                Some(row) => writeln!(out, ",{},{},{}", row.condition, row.dose, row.include_in_curve)?,
                None => writeln!(out, ",,,")?,
            },
            None => writeln!(out)?,
        }
    }
    Ok(())
}

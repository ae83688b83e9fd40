use std::path::Path;

use console::Style;
use tubulin_core::quantify::{QuantificationRecord, QuantifyConfig};

pub struct Styles {
    pub title: Style,
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub warn: Style,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warn: Style::new().yellow(),
        }
    }
}

/// Print one record with the settings that produced it.
pub fn print_record(record: &QuantificationRecord, config: &QuantifyConfig) {
    let s = Styles::new();

    println!();
    println!(
        "  {}",
        s.title.apply_to(format!("Quantification: {}", record.image_name))
    );
    println!();
    println!(
        "    {:<16}{}",
        s.label.apply_to("Microtubules"),
        s.value.apply_to(format!("{:.2}%", record.percentage))
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(format!(
            "{:.4} ({:?})",
            record.threshold_value, config.threshold_method
        ))
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Counted"),
        s.value
            .apply_to(format!("{} / {} px", record.counted_pixels, record.total_pixels))
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Blur / Morph"),
        s.value.apply_to(format!(
            "{} / {}",
            config.gaussian_blur_size, config.morphology_kernel_size
        ))
    );
    println!();
}

/// End-of-batch summary: counts, spread, and where the CSV landed.
pub fn print_batch_summary(records: &[QuantificationRecord], attempted: usize, csv_path: &Path) {
    let s = Styles::new();
    let percentages: Vec<f64> = records.iter().map(|r| r.percentage).collect();

    println!();
    println!("  {}", s.title.apply_to("Batch Summary"));
    println!();
    println!(
        "    {:<14}{}",
        s.label.apply_to("Processed"),
        s.value.apply_to(format!("{} / {}", records.len(), attempted))
    );
    if records.len() < attempted {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Skipped"),
            s.warn.apply_to(attempted - records.len())
        );
    }
    if !percentages.is_empty() {
        let (mean, std) = mean_std(&percentages);
        let min = percentages.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = percentages.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        println!(
            "    {:<14}{}",
            s.label.apply_to("Mean"),
            s.value.apply_to(format!("{mean:.2}%"))
        );
        println!(
            "    {:<14}{}",
            s.label.apply_to("Std Dev"),
            s.value.apply_to(format!("{std:.2}%"))
        );
        println!(
            "    {:<14}{}",
            s.label.apply_to("Range"),
            s.value.apply_to(format!("{min:.2}% - {max:.2}%"))
        );
    }
    println!(
        "    {:<14}{}",
        s.label.apply_to("Results"),
        s.value.apply_to(csv_path.display())
    );
    println!();
}

/// Mean and sample standard deviation (n-1 denominator).
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    if n == 1 {
        return (mean, 0.0);
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, var.sqrt())
}

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::summary::{mean_std, Styles};

#[derive(Args)]
pub struct DoseArgs {
    /// Results CSV produced by `tubulin batch`
    pub results: PathBuf,
}

#[derive(Clone, Debug)]
struct ResultRow {
    percentage: f64,
    condition: String,
    dose: Option<f64>,
    include_in_curve: String,
}

pub fn run(args: &DoseArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.results)
        .with_context(|| format!("reading {}", args.results.display()))?;
    let rows = parse_results(&text)?;
    if rows.is_empty() {
        bail!("no data rows in {}", args.results.display());
    }
    if rows.iter().all(|r| r.dose.is_none()) {
        bail!("results carry no dose information; re-run batch with --metadata");
    }

    let marked: Vec<&ResultRow> = rows
        .iter()
        .filter(|r| r.include_in_curve.eq_ignore_ascii_case("yes"))
        .collect();
    // Nothing marked for the curve means the column was not used; keep all.
    let curve = if marked.is_empty() {
        rows.iter().collect::<Vec<_>>()
    } else {
        marked
    };

    let s = Styles::new();
    println!();
    println!("  {}", s.title.apply_to("Dose-Response Summary"));
    println!();
    println!(
        "    {:>10}  {:>4}  {:>8}  {:>8}  {:>8}",
        s.header.apply_to("Dose"),
        s.header.apply_to("n"),
        s.header.apply_to("Mean"),
        s.header.apply_to("Std"),
        s.header.apply_to("SEM")
    );

    for (dose, values) in group_by_dose(&curve) {
        let (mean, std) = mean_std(&values);
        let sem = std / (values.len() as f64).sqrt();
        println!(
            "    {:>10}  {:>4}  {:>7.2}%  {:>7.2}%  {:>7.2}%",
            dose,
            values.len(),
            mean,
            std,
            sem
        );
    }

    let controls: Vec<&ResultRow> = rows
        .iter()
        .filter(|r| r.include_in_curve.eq_ignore_ascii_case("no"))
        .collect();
    if !controls.is_empty() {
        println!();
        println!("  {}", s.title.apply_to("Controls (excluded from curve)"));
        println!();
        for (condition, values) in group_by_condition(&controls) {
            let (mean, std) = mean_std(&values);
            println!(
                "    {:<20}{}",
                s.label.apply_to(condition),
                s.value
                    .apply_to(format!("{mean:.2}% \u{00b1} {std:.2}% (n={})", values.len()))
            );
        }
    }
    println!();

    Ok(())
}

fn parse_results(text: &str) -> Result<Vec<ResultRow>> {
    let mut lines = text.lines();
    let header = lines.next().context("results file is empty")?;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();

    let index = |name: &str| columns.iter().position(|&c| c == name);
    let pct_idx = index("green_percentage").context("missing green_percentage column")?;
    let condition_idx = index("condition");
    let dose_idx = index("dose");
    let include_idx = index("include_in_curve");

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let Some(percentage) = fields.get(pct_idx).and_then(|f| f.parse::<f64>().ok()) else {
            continue;
        };
        let field = |idx: Option<usize>| -> String {
            idx.and_then(|i| fields.get(i).copied()).unwrap_or("").to_string()
        };
        rows.push(ResultRow {
            percentage,
            condition: field(condition_idx),
            dose: dose_idx.and_then(|i| fields.get(i)).and_then(|f| f.parse().ok()),
            include_in_curve: field(include_idx),
        });
    }
    Ok(rows)
}

/// Group curve rows by dose, ascending. Rows without a dose are dropped.
fn group_by_dose(rows: &[&ResultRow]) -> Vec<(f64, Vec<f64>)> {
    let mut groups: Vec<(f64, Vec<f64>)> = Vec::new();
    for row in rows {
        let Some(dose) = row.dose else { continue };
        match groups.iter_mut().find(|(d, _)| *d == dose) {
            Some((_, values)) => values.push(row.percentage),
            None => groups.push((dose, vec![row.percentage])),
        }
    }
    groups.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    groups
}

fn group_by_condition(rows: &[&ResultRow]) -> Vec<(String, Vec<f64>)> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|(c, _)| *c == row.condition) {
            Some((_, values)) => values.push(row.percentage),
            None => groups.push((row.condition.clone(), vec![row.percentage])),
        }
    }
    groups
}

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Per-image experimental annotations joined into the results table.
#[derive(Clone, Debug)]
pub struct MetadataRow {
    pub condition: String,
    pub dose: String,
    pub include_in_curve: String,
}

/// Parse a metadata CSV keyed by image_name, with optional condition, dose
/// and include_in_curve columns. Plain comma-separated values, no quoting.
pub fn load_metadata(path: &Path) -> Result<HashMap<String, MetadataRow>> {
    let text = std::fs::read_to_string(path)?;
    let mut lines = text.lines();
    let header = lines.next().context("metadata file is empty")?;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();

    let index = |name: &str| columns.iter().position(|&c| c == name);
    let name_idx = index("image_name").context("metadata is missing an image_name column")?;
    let condition_idx = index("condition");
    let dose_idx = index("dose");
    let include_idx = index("include_in_curve");

    let mut rows = HashMap::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let Some(name) = fields.get(name_idx) else {
            continue;
        };
        let field = |idx: Option<usize>| -> String {
            idx.and_then(|i| fields.get(i).copied()).unwrap_or("").to_string()
        };
        rows.insert(
            name.to_string(),
            MetadataRow {
                condition: field(condition_idx),
                dose: field(dose_idx),
                include_in_curve: field(include_idx),
            },
        );
    }
    Ok(rows)
}

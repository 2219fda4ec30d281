use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::error::{MtlError, Result};
use crate::ingestion;
use crate::types::MaterialSet;

/// Summary of a completed run.
#[derive(Debug)]
pub struct ProcessingResult {
    pub file_count: usize,
    pub material_count: usize,
    pub texture_count: usize,
    pub duration: Duration,
}

/// Loads every configured MTL file and emits them as one JSON array.
pub struct Pipeline;

impl Pipeline {
    /// Load, serialize and write. Nothing is written if any input fails.
    pub fn run(config: &LoaderConfig) -> Result<ProcessingResult> {
        let start = Instant::now();

        info!(
            inputs = config.inputs.len(),
            metallic_roughness = config.options.metallic_roughness,
            "Starting MTL load"
        );

        let sets = Self::load_all(config)?;
        let json = Self::to_json(&sets, config.pretty)?;

        match &config.output {
            Some(path) => write_output(path, &json)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}")?;
            }
        }

        let result = ProcessingResult {
            file_count: sets.len(),
            material_count: sets.iter().map(MaterialSet::len).sum(),
            texture_count: sets
                .iter()
                .flat_map(|s| &s.materials)
                .map(|m| m.texture_count())
                .sum(),
            duration: start.elapsed(),
        };
        info!(
            files = result.file_count,
            materials = result.material_count,
            textures = result.texture_count,
            elapsed = ?result.duration,
            "Load complete"
        );
        Ok(result)
    }

    /// Parse all inputs in parallel. Output order follows input order.
    pub fn load_all(config: &LoaderConfig) -> Result<Vec<MaterialSet>> {
        config
            .inputs
            .par_iter()
            .map(|path| ingestion::load_mtl(path, &config.options))
            .collect()
    }

    pub fn to_json(sets: &[MaterialSet], pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(sets)?
        } else {
            serde_json::to_string(sets)?
        };
        Ok(json)
    }
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            MtlError::Output(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }
    fs::write(path, json)
        .map_err(|e| MtlError::Output(format!("Failed to write {}: {e}", path.display())))?;
    debug!(path = %path.display(), bytes = json.len(), "Wrote JSON output");
    Ok(())
}

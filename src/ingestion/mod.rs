pub mod line_source;
pub mod mtl_parser;
pub mod paths;

use std::path::Path;

use tracing::{debug, info};

use crate::config::MtlOptions;
use crate::error::Result;
use crate::types::MaterialSet;

pub use mtl_parser::{MaterialParser, parse_mtl};

/// Directory texture references in `mtl_path` are relative to.
fn mtl_directory(mtl_path: &Path) -> &Path {
    mtl_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Load an MTL file into a [`MaterialSet`].
///
/// Lines are parsed strictly in file order. The first I/O or decoding error
/// aborts the load and is returned unchanged; no partial result is produced.
pub fn load_mtl(mtl_path: &Path, options: &MtlOptions) -> Result<MaterialSet> {
    debug!(path = %mtl_path.display(), ?options, "Loading MTL");

    let mut parser = MaterialParser::new(mtl_directory(mtl_path), options)?;
    for line in line_source::read_lines(mtl_path)? {
        parser.parse_line(&line?);
    }
    let materials = parser.finish();

    info!(path = %mtl_path.display(), materials = materials.len(), "Loaded MTL");
    Ok(MaterialSet {
        source: mtl_path.to_path_buf(),
        materials,
    })
}

/// Async variant of [`load_mtl`]; each line is awaited before it is parsed.
#[cfg(feature = "async")]
pub async fn load_mtl_async(mtl_path: &Path, options: &MtlOptions) -> Result<MaterialSet> {
    debug!(path = %mtl_path.display(), ?options, "Loading MTL (async)");

    let mut parser = MaterialParser::new(mtl_directory(mtl_path), options)?;
    let mut lines = line_source::read_lines_async(mtl_path).await?;
    while let Some(line) = lines.next_line().await? {
        parser.parse_line(&line);
    }
    let materials = parser.finish();

    info!(path = %mtl_path.display(), materials = materials.len(), "Loaded MTL");
    Ok(MaterialSet {
        source: mtl_path.to_path_buf(),
        materials,
    })
}

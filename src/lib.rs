pub mod config;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod types;

pub use config::{LoaderConfig, MtlOptions};
pub use error::{MtlError, Result};
#[cfg(feature = "async")]
pub use ingestion::load_mtl_async;
pub use ingestion::{MaterialParser, load_mtl, parse_mtl};
pub use pipeline::Pipeline;
pub use types::{Material, MaterialSet};

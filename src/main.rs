use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mtl_loader::config::{CliArgs, LoaderConfig};
use mtl_loader::pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing; stdout is reserved for JSON
    let filter = if args.verbose {
        EnvFilter::new("mtl_loader=debug")
    } else {
        EnvFilter::new("mtl_loader=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config: LoaderConfig = args.into();

    // Configure rayon thread pool
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure rayon thread pool")?;
    }

    match Pipeline::run(&config) {
        Ok(result) => {
            eprintln!(
                "Done: {} materials from {} files in {:.2}s",
                result.material_count,
                result.file_count,
                result.duration.as_secs_f64()
            );
            Ok(())
        }
        Err(e) => {
            error!(%e, "MTL load failed");
            Err(anyhow::anyhow!(e)).context("mtl-loader failed")
        }
    }
}

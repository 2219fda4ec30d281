use std::path::PathBuf;

use clap::Parser;

/// Parser options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MtlOptions {
    /// Values in the file are already metallic-roughness PBR values:
    /// metallic lives in the `Ks`/`map_Ks` slots and roughness in `Ns`/`map_Ns`.
    pub metallic_roughness: bool,
}

impl MtlOptions {
    /// Shininess given to a material before any `Ns` line is seen.
    pub fn default_specular_shininess(&self) -> f32 {
        if self.metallic_roughness {
            1.0 // fully rough
        } else {
            0.0
        }
    }
}

/// Fully resolved loader configuration (constructed from CLI args).
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    pub inputs: Vec<PathBuf>,
    /// Write JSON here instead of stdout.
    pub output: Option<PathBuf>,
    pub options: MtlOptions,
    pub pretty: bool,
    pub verbose: bool,
    pub threads: Option<usize>,
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "mtl-loader",
    about = "Parse Wavefront MTL material libraries into JSON",
    version
)]
pub struct CliArgs {
    /// Input MTL files
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output JSON file (default: stdout)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Treat Ks/map_Ks as metallic and Ns/map_Ns as roughness
    #[arg(long)]
    pub metallic_roughness: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Worker thread count (default: all cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl From<CliArgs> for LoaderConfig {
    fn from(args: CliArgs) -> Self {
        LoaderConfig {
            inputs: args.inputs,
            output: args.output,
            options: MtlOptions {
                metallic_roughness: args.metallic_roughness,
            },
            pretty: args.pretty,
            verbose: args.verbose,
            threads: args.threads,
        }
    }
}

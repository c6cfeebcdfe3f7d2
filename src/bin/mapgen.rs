//! Generate a Perlin noise heightmap and append it to `perlin_{N}x{N}.fdf`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use perlin_fdf::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(
    name = "mapgen",
    about = "Generate a layered Perlin noise heightmap as an .fdf grid",
    long_about = "Generate a layered Perlin noise heightmap as an .fdf grid.\n\n\
                  Output goes to perlin_<SIZE>x<SIZE>.fdf and is appended to \
                  any existing file of the same name, never overwritten."
)]
struct Args {
    /// Number of samples along each axis
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Base noise seed; random when omitted
    #[arg(long)]
    seed: Option<u32>,

    /// Directory to write the grid file into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

impl Args {
    fn into_config(self) -> GeneratorConfig {
        let seed = self.seed.unwrap_or_else(rand::random);
        GeneratorConfig::new(self.size as usize, seed).with_out_dir(self.out_dir)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    log::info!(
        "Generating {0}x{0} terrain with seed {1}",
        config.size,
        config.seed
    );

    let path = config
        .generate()
        .with_context(|| format!("failed to write {}", config.output_path().display()))?;

    println!("{}", path.display());
    Ok(())
}

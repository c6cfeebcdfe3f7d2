use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::fdf::{output_file_name, write_grid};
use crate::terrain::{HeightConfig, HeightGenerator, TerrainColorMap};

/// Run parameters for one grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Samples along each axis
    pub size: usize,

    /// Base noise seed; layer `i` uses `seed + i`
    pub seed: u32,

    /// Directory the grid file is appended to
    pub out_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 100,
            seed: 0,
            out_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    pub fn new(size: usize, seed: u32) -> Self {
        Self {
            size,
            seed,
            ..Default::default()
        }
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// `out_dir/perlin_{size}x{size}.fdf`
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(output_file_name(self.size))
    }

    /// Build the samplers once and append the grid. Returns the path written to.
    pub fn generate(&self) -> io::Result<PathBuf> {
        let height = HeightConfig::default();
        log::debug!("Amplitude {}, layers {:?}", height.amplitude, height.layers);

        let generator = HeightGenerator::new(&height, self.seed);
        write_grid(
            &self.out_dir,
            self.size,
            &generator,
            &TerrainColorMap::terrain(),
        )
    }
}

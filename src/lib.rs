#![warn(clippy::all, rust_2018_idioms)]

//! Layered Perlin noise terrain, classified into terrain colors and written
//! as `.fdf` grid files.

pub mod config;
pub mod fdf;
pub mod models;
pub mod terrain;

pub use config::GeneratorConfig;
pub use fdf::{write_grid, FdfWriter};
pub use models::grid::{linspace, SampleGrid, SamplePoint};
pub use terrain::{HeightConfig, HeightGenerator, TerrainColor, TerrainColorMap};

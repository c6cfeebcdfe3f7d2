// Terrain sampling and classification

pub mod color_map;
pub mod heightmap;
pub mod noise;

pub use self::color_map::*;
pub use self::heightmap::*;
pub use self::noise::*;

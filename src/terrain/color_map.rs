use serde::{Deserialize, Serialize};

/// Fixed terrain display colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainColor {
    DeepSea,
    ShallowSea,
    Beach,
    Plain,
    Forest,
    Mountain,
    Snow,
}

impl TerrainColor {
    pub const ALL: [TerrainColor; 7] = [
        TerrainColor::DeepSea,
        TerrainColor::ShallowSea,
        TerrainColor::Beach,
        TerrainColor::Plain,
        TerrainColor::Forest,
        TerrainColor::Mountain,
        TerrainColor::Snow,
    ];

    /// 24-bit packed `0xRRGGBB`
    pub const fn packed(self) -> u32 {
        match self {
            TerrainColor::DeepSea => 0x1E3F5A,
            TerrainColor::ShallowSea => 0x92C4EE,
            TerrainColor::Beach => 0xF6E3D4,
            TerrainColor::Plain => 0x357A17,
            TerrainColor::Forest => 0x095429,
            TerrainColor::Mountain => 0x554124,
            TerrainColor::Snow => 0xFFFFFF,
        }
    }
}

/// A color band: elevations strictly below `upper` map to `color`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    pub upper: f64,
    pub color: TerrainColor,
}

impl ColorBand {
    pub const fn new(upper: f64, color: TerrainColor) -> Self {
        Self { upper, color }
    }
}

/// Ordered threshold classifier. The first band whose bound lies strictly
/// above the elevation wins; anything left over gets `fallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainColorMap {
    bands: Vec<ColorBand>,
    fallback: TerrainColor,
}

impl Default for TerrainColorMap {
    fn default() -> Self {
        Self::terrain()
    }
}

impl TerrainColorMap {
    /// Bands are sorted by upper bound, lowest first
    pub fn new(mut bands: Vec<ColorBand>, fallback: TerrainColor) -> Self {
        bands.sort_by(|a, b| a.upper.total_cmp(&b.upper));
        Self { bands, fallback }
    }

    /// Sea to snow
    pub fn terrain() -> Self {
        Self::new(
            vec![
                ColorBand::new(-1.0, TerrainColor::DeepSea),
                ColorBand::new(0.0, TerrainColor::ShallowSea),
                ColorBand::new(0.5, TerrainColor::Beach),
                ColorBand::new(2.0, TerrainColor::Plain),
                ColorBand::new(5.0, TerrainColor::Forest),
                ColorBand::new(7.0, TerrainColor::Mountain),
            ],
            TerrainColor::Snow,
        )
    }

    /// Classify a raw, unclamped elevation. NaN falls through to the fallback.
    pub fn classify(&self, elevation: f64) -> TerrainColor {
        self.bands
            .iter()
            .find(|band| elevation < band.upper)
            .map_or(self.fallback, |band| band.color)
    }

    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    pub fn fallback(&self) -> TerrainColor {
        self.fallback
    }
}

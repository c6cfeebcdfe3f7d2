//! `.fdf` grid output.
//!
//! One line per grid row, each line holding space separated
//! `elevation,0xrrggbb` tokens. Files are opened in append mode and never
//! truncated, so running twice with the same size stacks two grids in the
//! same file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::models::grid::SampleGrid;
use crate::terrain::color_map::{TerrainColor, TerrainColorMap};
use crate::terrain::heightmap::HeightGenerator;
use crate::terrain::noise::NoiseSampler;

/// `perlin_{size}x{size}.fdf`
pub fn output_file_name(size: usize) -> String {
    format!("perlin_{size}x{size}.fdf")
}

/// Elevation as written: never below zero, and never `-0.0`.
pub fn display_elevation(elevation: f64) -> f64 {
    if elevation > 0.0 {
        elevation
    } else {
        0.0
    }
}

/// One cell token. `elevation` is the raw value; only the printed number is clamped.
pub fn format_cell(elevation: f64, color: TerrainColor) -> String {
    format!(
        "{:.1},0x{:06x}",
        display_elevation(elevation),
        color.packed()
    )
}

pub fn format_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(cell.as_ref());
    }
    line
}

/// Line oriented grid writer
pub struct FdfWriter<W: Write> {
    writer: W,
    rows_written: usize,
}

impl FdfWriter<BufWriter<File>> {
    /// Open `path` for appending, creating it if missing
    pub fn append(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> FdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows_written: 0,
        }
    }

    pub fn write_row<S: AsRef<str>>(&mut self, cells: &[S]) -> io::Result<()> {
        writeln!(self.writer, "{}", format_row(cells))?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Sample, classify and format every row of `grid`, passing each to `emit`.
pub fn render_rows<S, F>(
    grid: &SampleGrid,
    generator: &HeightGenerator<S>,
    color_map: &TerrainColorMap,
    mut emit: F,
) -> io::Result<()>
where
    S: NoiseSampler,
    F: FnMut(&[String]) -> io::Result<()>,
{
    for row in grid.rows() {
        let cells: Vec<String> = row
            .into_iter()
            .map(|point| {
                let elevation = generator.elevation(point);
                format_cell(elevation, color_map.classify(elevation))
            })
            .collect();
        emit(&cells)?;
    }
    Ok(())
}

/// Append a `size`×`size` grid to `dir/perlin_{size}x{size}.fdf`.
///
/// Returns the path written to.
pub fn write_grid<S: NoiseSampler>(
    dir: &Path,
    size: usize,
    generator: &HeightGenerator<S>,
    color_map: &TerrainColorMap,
) -> io::Result<PathBuf> {
    let path = dir.join(output_file_name(size));
    let start = Instant::now();
    log::info!("Appending {size}x{size} grid to {}", path.display());

    let grid = SampleGrid::new(size);
    let mut writer = FdfWriter::append(&path)?;
    render_rows(&grid, generator, color_map, |cells| {
        writer.write_row(cells)?;
        log::debug!("Wrote row {}/{}", writer.rows_written(), size);
        Ok(())
    })?;

    let rows = writer.rows_written();
    writer.finish()?;
    log::info!(
        "Wrote {} rows to {} in {:.2?}",
        rows,
        path.display(),
        start.elapsed()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::SamplePoint;
    use crate::terrain::heightmap::HeightConfig;

    struct ConstantNoise(f64);

    impl NoiseSampler for ConstantNoise {
        fn sample(&self, _point: SamplePoint) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(2), "perlin_2x2.fdf");
        assert_eq!(output_file_name(100), "perlin_100x100.fdf");
    }

    #[test]
    fn test_clamp_keeps_raw_classification() {
        // Deep sea color, clamped number
        assert_eq!(format_cell(-3.2, TerrainColor::DeepSea), "0.0,0x1e3f5a");
        assert_eq!(format_cell(-0.0, TerrainColor::Beach), "0.0,0xf6e3d4");
        assert_eq!(format_cell(f64::NAN, TerrainColor::Snow), "0.0,0xffffff");
    }

    #[test]
    fn test_cell_formatting() {
        assert_eq!(format_cell(3.17, TerrainColor::Forest), "3.2,0x095429");
        assert_eq!(format_cell(12.0, TerrainColor::Snow), "12.0,0xffffff");
        assert_eq!(format_cell(0.04, TerrainColor::Beach), "0.0,0xf6e3d4");
        assert_eq!(format_cell(1.26, TerrainColor::Plain), "1.3,0x357a17");
    }

    #[test]
    fn test_display_elevation() {
        assert_eq!(display_elevation(-5.0), 0.0);
        assert!(display_elevation(-0.0).is_sign_positive());
        assert_eq!(display_elevation(4.5), 4.5);
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&["a", "b", "c"]), "a b c");
        assert_eq!(format_row(&["only"]), "only");
        assert_eq!(format_row::<&str>(&[]), "");
    }

    #[test]
    fn test_writer_appends_lines() {
        let mut writer = FdfWriter::new(Vec::new());
        writer.write_row(&["1.0,0x357a17", "0.0,0x1e3f5a"]).unwrap();
        writer.write_row(&["7.5,0xffffff", "2.0,0x095429"]).unwrap();
        assert_eq!(writer.rows_written(), 2);

        let bytes = writer.finish().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "1.0,0x357a17 0.0,0x1e3f5a\n7.5,0xffffff 2.0,0x095429\n"
        );
    }

    #[test]
    fn test_render_rows_uses_raw_elevation_for_color() {
        let config = HeightConfig::default();
        // Every layer at -0.1: (-0.1 - 0.05 - 0.025 - 0.0125) * 20 = -3.75
        let samplers = (0..4).map(|_| ConstantNoise(-0.1)).collect();
        let generator = HeightGenerator::from_samplers(&config, samplers);

        let mut rows = Vec::new();
        render_rows(
            &SampleGrid::new(3),
            &generator,
            &TerrainColorMap::terrain(),
            |cells| {
                rows.push(cells.to_vec());
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row, vec!["0.0,0x1e3f5a"; 3]);
        }
    }

    #[test]
    fn test_render_rows_propagates_errors() {
        let config = HeightConfig::default();
        let generator = HeightGenerator::new(&config, 1);
        let mut calls = 0;

        let result = render_rows(
            &SampleGrid::new(4),
            &generator,
            &TerrainColorMap::terrain(),
            |_| {
                calls += 1;
                Err(io::Error::other("disk full"))
            },
        );

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}

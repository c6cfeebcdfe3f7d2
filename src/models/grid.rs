use serde::{Deserialize, Serialize};

/// A normalized sample coordinate, both axes in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub row: f64,
    pub col: f64,
}

impl SamplePoint {
    pub fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }
}

/// `n` evenly spaced values over `[0, 1]`, endpoints included.
///
/// `n == 1` yields `[0.0]` and `n == 0` yields nothing.
pub fn linspace(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

/// Square `size`×`size` sampling grid over the unit square.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    pub size: usize,
    coords: Vec<f64>,
}

impl SampleGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            coords: linspace(size),
        }
    }

    /// Coordinates shared by both axes.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Rows top to bottom, each row's points left to right.
    pub fn rows(&self) -> impl Iterator<Item = Vec<SamplePoint>> + '_ {
        self.coords.iter().map(move |&row| {
            self.coords
                .iter()
                .map(|&col| SamplePoint::new(row, col))
                .collect()
        })
    }

    /// Every point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = SamplePoint> + '_ {
        self.coords.iter().flat_map(move |&row| {
            self.coords
                .iter()
                .map(move |&col| SamplePoint::new(row, col))
        })
    }
}

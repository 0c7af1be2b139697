//! Discrete generation axes and the cells of their Cartesian product.

use crate::constants::SINGLE_LEVEL_FALLBACK;
use crate::error::{GeneratorError, Result};

/// A named dimension with a fixed number of levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub name: String,
    pub count: u32,
}

impl Axis {
    /// Creates an axis, rejecting a count of zero.
    pub fn new(name: &str, count: u32) -> Result<Self> {
        let axis = Self {
            name: name.to_string(),
            count,
        };
        axis.validate()?;
        Ok(axis)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(GeneratorError::InvalidAxis(self.name.clone()));
        }
        Ok(())
    }

    /// True when `index / (count - 1)` is undefined.
    pub fn is_degenerate(&self) -> bool {
        self.count == 1
    }

    /// Maps a level index onto [0, 1].
    /// A single-level axis has no span and yields the fixed fallback.
    pub fn normalized(&self, index: u32) -> f64 {
        if self.count <= 1 {
            return SINGLE_LEVEL_FALLBACK;
        }
        index as f64 / (self.count - 1) as f64
    }
}

/// One coordinate of the roughness x metallic product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub roughness: u32,
    pub metallic: u32,
}

/// Enumerates every cell in row-major order: roughness is the outer axis.
pub fn cells(roughness: &Axis, metallic: &Axis) -> impl Iterator<Item = GridCell> {
    let metallic_count = metallic.count;
    (0..roughness.count).flat_map(move |r| {
        (0..metallic_count).map(move |m| GridCell {
            roughness: r,
            metallic: m,
        })
    })
}

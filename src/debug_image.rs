use std::path::Path;

use anyhow::{ensure, Context, Result};
use image::{GrayImage, Luma};
use itertools::{Itertools, MinMaxResult};

use crate::*;

/// Rectangle of the `z = depth` plane sampled on a pixel grid
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    pub width: u32,
    pub height: u32,
    pub min: Vec2,
    pub max: Vec2,
    pub depth: f32,
}

impl View {
    /// Current space position of the center of pixel `(x, y)`. Row 0 is at `max.y`.
    pub fn point(&self, x: u32, y: u32) -> Vec3 {
        let u = (x as f32 + 0.5) / self.width as f32;
        let v = (y as f32 + 0.5) / self.height as f32;
        vec3(
            self.min.x + (self.max.x - self.min.x) * u,
            self.max.y + (self.min.y - self.max.y) * v,
            self.depth,
        )
    }

    /// Pixel centers in row-major order
    pub fn points(&self) -> Vec<Vec3> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(y, x)| self.point(x, y))
            .collect()
    }
}

/// How values are mapped to grey levels
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Levels {
    /// Stretch the observed finite range to black..white
    Auto,
    /// Values at or below the first are black, at or above the second white
    Fixed(f32, f32),
}

impl Levels {
    /// Fixed range if either bound is given, the missing one defaulting to 0 or 1
    pub fn from_bounds(low: Option<f32>, high: Option<f32>) -> Result<Self> {
        if low.is_none() && high.is_none() {
            return Ok(Levels::Auto);
        }
        let (low, high) = (low.unwrap_or(0.), high.unwrap_or(1.));
        ensure!(low < high, "Grey range is empty: low {low} must be below high {high}");
        Ok(Levels::Fixed(low, high))
    }
}

pub struct PatternImage {
    view: View,
    values: Vec<f32>,
}

impl PatternImage {
    pub fn render<S, N>(shader: &Shader<S, N>, view: View) -> Self
    where
        S: ShadingSpace + Sync,
        N: NoiseSource + Sync,
    {
        Self {
            view,
            values: shader.shade_many(&view.points()),
        }
    }

    pub fn value(&self, x: u32, y: u32) -> f32 {
        self.values[(y * self.view.width + x) as usize]
    }

    /// Smallest and largest finite value, if any
    pub fn range(&self) -> Option<(f32, f32)> {
        match self.values.iter().copied().filter(|v| v.is_finite()).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(value) => Some((value, value)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }

    pub fn to_image(&self, levels: Levels) -> GrayImage {
        let (low, high) = match levels {
            Levels::Auto => self.range().unwrap_or((0., 1.)),
            Levels::Fixed(low, high) => (low, high),
        };
        GrayImage::from_fn(self.view.width, self.view.height, |x, y| {
            Luma([grey(self.value(x, y), low, high)])
        })
    }

    pub fn save(&self, path: impl AsRef<Path>, levels: Levels) -> Result<()> {
        let path = path.as_ref();
        self.to_image(levels)
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn grey(value: f32, low: f32, high: f32) -> u8 {
    if high <= low {
        return 128;
    }
    ((value - low) / (high - low)).clamp(0., 1.).mul_add(255., 0.5) as u8
}

use std::{path::Path, str::FromStr};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    // Noise settings
    pub seed: Option<u64>,
    pub pattern: Pattern,
    pub space: SpaceConfig,
    // Preview settings
    pub width: u32,
    pub height: u32,
    /// Corners of the sampled region of the `z = depth` plane, in current space
    pub min: [f32; 2],
    pub max: [f32; 2],
    pub depth: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            pattern: default(),
            space: default(),
            width: 256,
            height: 256,
            min: [-2., -2.],
            max: [2., 2.],
            depth: 0.,
        }
    }
}

/// Placement of shader space inside current space
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpaceConfig {
    pub translation: [f32; 3],
    /// XYZ euler angles in degrees
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            translation: [0.; 3],
            rotation: [0.; 3],
            scale: [1.; 3],
        }
    }
}

impl SpaceConfig {
    pub fn frame(&self) -> ShaderFrame {
        let [x, y, z] = self.rotation.map(f32::to_radians);
        ShaderFrame::new(
            Vec3::from(self.scale),
            Quat::from_euler(EulerRot::XYZ, x, y, z),
            Vec3::from(self.translation),
        )
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("Invalid config")?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        text.parse::<Config>()
            .with_context(|| format!("Failed to load config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("Image size must be positive, got {}x{}", self.width, self.height)
        }
        if self.space.scale.contains(&0.) {
            bail!("Shader space scale must be non-zero, got {:?}", self.space.scale)
        }
        if matches!(self.pattern, Pattern::LayerNoise(params) if params.gain == 0.) {
            bail!("layer_noise gain must be non-zero")
        }
        Ok(())
    }

    pub fn view(&self) -> View {
        View {
            width: self.width,
            height: self.height,
            min: Vec2::from(self.min),
            max: Vec2::from(self.max),
            depth: self.depth,
        }
    }

    pub fn shader(&self, seed: u64) -> Shader<ShaderFrame, ValueNoise> {
        Shader::new(self.space.frame(), ValueNoise::new(seed), self.pattern)
    }
}

//! Multi-octave noise patterns.
//!
//! Both kernels are pure: the shading point, the coordinate transform and the noise primitive
//! are all passed in, so they can be evaluated from any number of threads at once.

use serde::Deserialize;

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TurbulenceParams {
    /// Octave count. Fractional counts round up, `<= 0` yields no octaves
    pub layers: f32,
    /// Octave `i` is scaled by `freq^-gain`
    pub gain: f32,
    /// Scales the shader space position before the first octave
    pub start_freq: f32,
    /// Frequency multiplier between octaves
    pub lacunarity: f32,
}

impl Default for TurbulenceParams {
    fn default() -> Self {
        Self {
            layers: 6.,
            gain: 0.5,
            start_freq: 1.,
            lacunarity: 2.,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayerNoiseParams {
    pub layers: f32,
    /// Divides every octave equally. Must not be zero.
    pub gain: f32,
}

impl Default for LayerNoiseParams {
    fn default() -> Self {
        Self {
            layers: 4.,
            gain: 4.,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pattern {
    Turbulence(TurbulenceParams),
    LayerNoise(LayerNoiseParams),
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Turbulence(default())
    }
}

impl Pattern {
    pub fn eval(&self, p: Vec3, space: &impl ShadingSpace, noise: &impl NoiseSource) -> f32 {
        match self {
            Pattern::Turbulence(params) => turbulence(p, params, space, noise),
            Pattern::LayerNoise(params) => layer_noise(p, params, space, noise),
        }
    }
}

/// Indices of the octaves to evaluate, as the shading language loop `for (i = 0; i < layers; i += 1)` would
fn octaves(layers: f32) -> impl Iterator<Item = f32> {
    (0..).map(|i| i as f32).take_while(move |&i| i < layers)
}

/// Sum of absolute-valued octaves, with amplitude falling off as `freq^-gain`.
///
/// Every octave contributes `|noise(pp * freq) - 0.5| * 2 / freq^gain`, where `pp` is the
/// shader space position scaled by `start_freq`. The result is never negative, but has no upper
/// bound.
pub fn turbulence(
    p: Vec3,
    params: &TurbulenceParams,
    space: &impl ShadingSpace,
    noise: &impl NoiseSource,
) -> f32 {
    let pp = space.to_shader(p) * params.start_freq;
    let mut mag = 0.;
    let mut freq = 1f32;
    for _ in octaves(params.layers) {
        mag += (noise.noise(pp * freq) - 0.5).abs() * 2. / freq.powf(params.gain);
        freq *= params.lacunarity;
    }
    mag
}

/// Sum of signed octaves, each divided by `gain`, recentered around 0.5.
///
/// The sampling frequency doubles every octave but the amplitude does not follow it.
///
/// `gain` must be non-zero; with `gain == 0` the result is infinite or NaN.
pub fn layer_noise(
    p: Vec3,
    params: &LayerNoiseParams,
    space: &impl ShadingSpace,
    noise: &impl NoiseSource,
) -> f32 {
    let pt = space.to_shader(p);
    let mut mag = 0.;
    let mut freq = 1f32;
    for _ in octaves(params.layers) {
        mag += (noise.noise(pt * freq) - 0.5) * 2. / params.gain;
        freq *= 2.;
    }
    mag + 0.5
}

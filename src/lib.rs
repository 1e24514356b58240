//! Octave noise patterns for per-point shading: `turbulence` and `layer_noise`.
//!
//! The renderer's implicit inputs (shading point, `transform("shader", P)` and `noise`) are
//! passed in explicitly, see [`ShadingSpace`] and [`NoiseSource`].

// Flat module hierarchy is ok for now
mod config;
pub mod debug_image;
mod fractal;
mod noise;
mod shader;
mod space;

pub use bevy_math::{ivec3, vec2, vec3, Affine3A, EulerRot, IVec3, Mat4, Quat, Vec2, Vec3};
pub use config::*;
pub use debug_image::{Levels, PatternImage, View};
pub use fractal::*;
pub use noise::*;
pub use shader::*;
pub use space::*;

pub fn default<T: Default>() -> T {
    Default::default()
}

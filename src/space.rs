use crate::*;

/// Converts points from the renderer's current space into shader space
pub trait ShadingSpace {
    fn to_shader(&self, p: Vec3) -> Vec3;
}

/// Shader space coincides with current space
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Identity;

impl ShadingSpace for Identity {
    fn to_shader(&self, p: Vec3) -> Vec3 {
        p
    }
}

// Matrices are taken to already be the current -> shader transform
impl ShadingSpace for Affine3A {
    fn to_shader(&self, p: Vec3) -> Vec3 {
        self.transform_point3(p)
    }
}

impl ShadingSpace for Mat4 {
    fn to_shader(&self, p: Vec3) -> Vec3 {
        self.transform_point3(p)
    }
}

impl<S: ShadingSpace + ?Sized> ShadingSpace for &S {
    fn to_shader(&self, p: Vec3) -> Vec3 {
        (**self).to_shader(p)
    }
}

/// Placement of a shader inside current space.
///
/// Built from how the shader's frame sits in current space (scale, then rotation, then
/// translation); `to_shader` applies the inverse of that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShaderFrame {
    to_current: Affine3A,
    to_shader: Affine3A,
}

impl ShaderFrame {
    pub fn new(scale: Vec3, rotation: Quat, translation: Vec3) -> Self {
        Self::from_affine(Affine3A::from_scale_rotation_translation(
            scale,
            rotation,
            translation,
        ))
    }

    /// `to_current` maps shader space into current space
    pub fn from_affine(to_current: Affine3A) -> Self {
        Self {
            to_current,
            to_shader: to_current.inverse(),
        }
    }

    pub fn to_current(&self, p: Vec3) -> Vec3 {
        self.to_current.transform_point3(p)
    }
}

impl Default for ShaderFrame {
    fn default() -> Self {
        Self::from_affine(Affine3A::IDENTITY)
    }
}

impl ShadingSpace for ShaderFrame {
    fn to_shader(&self, p: Vec3) -> Vec3 {
        self.to_shader.transform_point3(p)
    }
}

use rayon::prelude::*;

use crate::*;

/// A pattern bound to the space and noise it is evaluated with
#[derive(Debug, Clone, Default)]
pub struct Shader<S, N> {
    pub space: S,
    pub noise: N,
    pub pattern: Pattern,
}

impl<S: ShadingSpace, N: NoiseSource> Shader<S, N> {
    pub fn new(space: S, noise: N, pattern: Pattern) -> Self {
        Self {
            space,
            noise,
            pattern,
        }
    }

    /// Value of the pattern at `p`, given in current space
    pub fn shade(&self, p: Vec3) -> f32 {
        self.pattern.eval(p, &self.space, &self.noise)
    }

    /// Shades every point in parallel; the output lines up with `points`
    pub fn shade_many(&self, points: &[Vec3]) -> Vec<f32>
    where
        S: Sync,
        N: Sync,
    {
        points.par_iter().map(|&p| self.shade(p)).collect()
    }
}

use nanorand::{RandomGen, WyRand};

use crate::*;

/// A 3D-to-scalar noise primitive.
///
/// Implementations must be deterministic in `p` and should return values in `[0, 1]`.
pub trait NoiseSource {
    fn noise(&self, p: Vec3) -> f32;
}

impl<F: Fn(Vec3) -> f32> NoiseSource for F {
    fn noise(&self, p: Vec3) -> f32 {
        self(p)
    }
}

/// Same value everywhere. Mostly useful for calibrating patterns.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Constant(pub f32);

impl NoiseSource for Constant {
    fn noise(&self, _: Vec3) -> f32 {
        self.0
    }
}

/// Lattice value noise with a quintic fade, in `[0, 1]`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ValueNoise {
    pub seed: u64,
}

impl ValueNoise {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Value stored at an integer lattice point
    pub fn lattice(&self, cell: IVec3) -> f32 {
        lattice_hash(self.seed, cell)
    }
}

impl NoiseSource for ValueNoise {
    /// Non-finite positions have no cell and sample as 0.5. Far beyond `i32` range the cells
    /// wrap around.
    fn noise(&self, p: Vec3) -> f32 {
        if !p.is_finite() {
            return 0.5;
        }
        let base = p.floor();
        let cell = base.as_ivec3();
        let t = (p - base).to_array().map(fade);

        let corner = |x, y, z| self.lattice(cell.wrapping_add(ivec3(x, y, z)));
        let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), t[0]);
        let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), t[0]);
        let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), t[0]);
        let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), t[0]);
        lerp(lerp(x00, x10, t[1]), lerp(x01, x11, t[1]), t[2])
    }
}

fn lattice_hash(seed: u64, cell: IVec3) -> f32 {
    let key = (cell.x as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (cell.y as u32 as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
        ^ (cell.z as u32 as u64).wrapping_mul(0x1656_67B1_9E37_79F9)
        ^ seed;
    f32::random(&mut WyRand::new_seed(key)).clamp(0., 1.)
}

fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6. - 15.) + 10.)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sources() {
        let source = |p: Vec3| p.x;
        assert_eq!(source.noise(vec3(0.25, 1., 2.)), 0.25);
        assert_eq!(Constant(0.7).noise(vec3(3., -4., 5.)), 0.7);
    }

    #[test]
    fn value_noise_range() {
        let noise = ValueNoise::new(3);
        for i in 0..500 {
            let p = vec3(i as f32 * 0.37, i as f32 * -0.91, i as f32 * 0.13 + 5.);
            let value = noise.noise(p);
            assert!(
                (0. ..=1.).contains(&value),
                "Noise value {value} at {p:?} out of range"
            );
        }
    }

    #[test]
    fn value_noise_reproducible() {
        let pos = vec3(0.5, 0.3, 0.7);
        assert_eq!(ValueNoise::new(12345).noise(pos), ValueNoise::new(12345).noise(pos));
    }

    #[test]
    fn different_seeds_differ() {
        let pos = vec3(1.5, -2.3, 0.7);
        assert_ne!(ValueNoise::new(1).noise(pos), ValueNoise::new(2).noise(pos));
    }

    #[test]
    fn hits_lattice_values() {
        let noise = ValueNoise::new(9);
        for cell in [ivec3(0, 0, 0), ivec3(-3, 7, 2), ivec3(12, -1, -8)] {
            let value = noise.noise(cell.as_vec3());
            assert!((value - noise.lattice(cell)).abs() < 1e-6);
        }
    }

    #[test]
    fn far_coordinates() {
        let noise = ValueNoise::new(1);
        for p in [
            vec3(3.0e9, 0., 0.),
            vec3(-3.0e9, 2.5, -7.),
            vec3(2147483520., 2147483647., -2147483648.),
            vec3(1.0e30, -1.0e30, 0.5),
            Vec3::splat(f32::MAX),
            Vec3::splat(f32::MIN),
        ] {
            let value = noise.noise(p);
            assert!(
                (0. ..=1.).contains(&value),
                "Noise value {value} at {p:?} out of range"
            );
        }
    }

    #[test]
    fn non_finite_coordinates() {
        let noise = ValueNoise::new(1);
        for p in [
            vec3(f32::INFINITY, 0., 0.),
            vec3(0., f32::NEG_INFINITY, 1.),
            vec3(0.5, 0.5, f32::NAN),
        ] {
            assert_eq!(noise.noise(p), 0.5);
        }
    }

    #[test]
    fn continuous_across_cells() {
        let noise = ValueNoise::new(4);
        let below = noise.noise(vec3(0.9999, 0.5, 0.5));
        let above = noise.noise(vec3(1.0001, 0.5, 0.5));
        assert!((below - above).abs() < 1e-3, "{below} vs {above}");
    }
}

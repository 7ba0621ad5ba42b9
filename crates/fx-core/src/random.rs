use rand::prelude::*;

pub type FxRng = StdRng;

/// Uniform value in `[min, max)`. `min == max` yields `min`; never panics,
/// unlike `gen_range` on an empty range.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

#[inline]
pub fn random_in<R: Rng + ?Sized>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    random_between(rng, min, max)
}

/// Bernoulli draw: true with probability `p`.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    rng.gen::<f32>() < p
}

/// Derive an independent RNG stream per component from one base seed, so a
/// seeded runtime is reproducible while components don't share draws.
pub fn stream_rng(seed: Option<u64>, stream: u64) -> FxRng {
    match seed {
        Some(s) => {
            let mix = s ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            StdRng::seed_from_u64(mix)
        }
        None => StdRng::from_entropy(),
    }
}

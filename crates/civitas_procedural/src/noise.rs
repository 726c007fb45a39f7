//! # Coherent Noise Field
//!
//! Smooth 2D noise for zone classification and building height variation.
//!
//! ## Determinism Guarantee
//!
//! The field is a pure function of `(seed, x, y)`: sampling never mutates
//! state, so one instance can serve every call site and the order of
//! samples does not matter.

use crate::random::CitySeed;

/// A deterministic 2D scalar field.
///
/// Implementations must be pure: the same `(x, y)` always yields the same
/// value, nearby coordinates yield close values, and every value lies in
/// `[-1, 1]`.
pub trait NoiseField {
    /// Samples the field at `(x, y)`.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Pre-computed permutation table for noise.
///
/// This is computed once from the seed and reused.
struct PermutationTable {
    /// 512-entry permutation table (256 entries, doubled for overflow handling).
    perm: [u8; 512],
}

impl PermutationTable {
    /// Non-zero start state for seeds that would leave xorshift stuck at 0.
    const ZERO_SEED_STATE: u64 = 0x9E37_79B9_7F4A_7C15;

    /// 12 gradient vectors for 2D simplex.
    const GRADIENTS: [[i8; 2]; 12] = [
        [1, 0], [1, 1], [0, 1], [-1, 1],
        [-1, 0], [-1, -1], [0, -1], [1, -1],
        [1, 0], [0, 1], [-1, 0], [0, -1],
    ];

    /// Creates a new permutation table from a seed.
    #[allow(clippy::cast_possible_truncation)]
    fn new(seed: CitySeed) -> Self {
        let mut perm = [0u8; 512];

        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates shuffle driven by xorshift64. The modulo stays in u64
        // so the shuffle is identical on 32- and 64-bit targets.
        let mut rng_state = match seed.value() {
            0 => Self::ZERO_SEED_STATE,
            value => value,
        };
        for i in (1..256usize).rev() {
            rng_state ^= rng_state << 13;
            rng_state ^= rng_state >> 7;
            rng_state ^= rng_state << 17;

            let j = (rng_state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }

        // Double the table to avoid index wrapping
        perm.copy_within(0..256, 256);

        Self { perm }
    }

    /// Gets a permutation value (with automatic wrapping).
    #[inline]
    fn get(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    /// Gets a gradient for a given hash.
    #[inline]
    fn gradient(hash: u8) -> [i8; 2] {
        Self::GRADIENTS[(hash % 12) as usize]
    }
}

/// 2D Simplex noise generator.
///
/// Produces smooth, continuous noise values in the range [-1, 1].
///
/// # Example
///
/// ```rust,ignore
/// let noise = SimplexNoise::new(CitySeed::new(42));
///
/// let value = noise.sample(0.4, 0.8);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
pub struct SimplexNoise {
    perm_table: PermutationTable,
}

impl SimplexNoise {
    /// Skewing factor for 2D simplex grid.
    const F2: f64 = 0.366_025_403_784_439; // (sqrt(3) - 1) / 2
    /// Unskewing factor for 2D simplex grid.
    const G2: f64 = 0.211_324_865_405_187; // (3 - sqrt(3)) / 6

    /// Creates a new simplex noise generator from a seed.
    #[must_use]
    pub fn new(seed: CitySeed) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Raw simplex value, before clamping.
    #[allow(clippy::cast_sign_loss, clippy::similar_names)]
    fn raw(&self, x: f64, y: f64) -> f64 {
        // Skew input coordinates to simplex grid
        let skew = (x + y) * Self::F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        // Unskew to get first corner in simplex
        let unskew = (f64::from(i) + f64::from(j)) * Self::G2;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Upper or lower triangle
        let (i1, j1) = if x0 > y0 { (1usize, 0usize) } else { (0, 1) };
        let (fi1, fj1) = if x0 > y0 { (1.0, 0.0) } else { (0.0, 1.0) };

        // Offsets for second and third corners
        let x1 = x0 - fi1 + Self::G2;
        let y1 = y0 - fj1 + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let table = &self.perm_table;
        let gi0 = table.get(ii + table.get(jj) as usize);
        let gi1 = table.get(ii + i1 + table.get(jj + j1) as usize);
        let gi2 = table.get(ii + 1 + table.get(jj + 1) as usize);

        let n0 = Self::contribution(x0, y0, gi0);
        let n1 = Self::contribution(x1, y1, gi1);
        let n2 = Self::contribution(x2, y2, gi2);

        // 70.0 normalizes the sum to roughly [-1, 1]
        70.0 * (n0 + n1 + n2)
    }

    /// Calculates the contribution from one corner of the simplex.
    #[inline]
    fn contribution(x: f64, y: f64, gradient_index: u8) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let grad = PermutationTable::gradient(gradient_index);
            let t2 = t * t;
            t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
        }
    }
}

impl NoiseField for SimplexNoise {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.raw(x, y).clamp(-1.0, 1.0)
    }
}

/// Fast floor function.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi - 1
    } else {
        xi
    }
}

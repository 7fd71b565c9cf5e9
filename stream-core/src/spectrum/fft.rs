//! In-place complex FFT kernel
//!
//! Iterative radix-2 Cooley-Tukey transform over interleaved (re, im)
//! pairs. Twiddle factors are generated with the partial-angle
//! trigonometric recurrence, so each butterfly stage costs one sine and
//! one cosine evaluation regardless of size.
//!
//! Neither direction applies 1/n normalization: a forward transform
//! followed by an inverse transform scales the signal by n. The streaming
//! objects built on top of this kernel rely on that convention.

use std::f64::consts::PI;

/// Transform direction
///
/// The inverse direction negates the twiddle angle; the forward direction
/// uses the e^(-i 2pi/n) analysis convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn angle_sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Transform `n` complex samples in place
///
/// # Arguments
/// * `data` - `2*n` floats holding `n` interleaved (re, im) pairs
/// * `direction` - analysis or synthesis twiddle sign
///
/// # Panics
/// Panics if the pair count is not a power of two; the radix-2 butterfly
/// schedule is only correct for such sizes.
pub fn transform(data: &mut [f32], direction: Direction) {
    assert_eq!(data.len() % 2, 0, "interleaved buffer must have even length");
    let n = data.len() / 2;
    assert!(
        n.is_power_of_two(),
        "complex FFT size must be a power of two, got {}",
        n
    );

    bit_reverse_permute(data, n);
    butterfly_passes(data, n, direction.angle_sign());
}

/// Reorder elements so each lands at its bit-reversed index
///
/// Standard incremental walk: `j` tracks the bit-reversed counterpart of
/// `i` by propagating the carry from the top bit downward, so no reversal
/// table is needed.
fn bit_reverse_permute(data: &mut [f32], n: usize) {
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            data.swap(2 * i, 2 * j);
            data.swap(2 * i + 1, 2 * j + 1);
        }
    }
}

fn butterfly_passes(data: &mut [f32], n: usize, sign: f64) {
    // half = half the butterfly span, in complex elements
    let mut half = 1usize;
    while half < n {
        let span = half << 1;
        let theta = sign * PI / half as f64;

        // Recurrence state: w starts at 1 and is multiplied by e^(i*theta)
        // once per twiddle index. wpr = cos(theta) - 1 keeps the update
        // stable for small angles.
        let wtemp = (0.5 * theta).sin();
        let wpr = -2.0 * wtemp * wtemp;
        let wpi = theta.sin();
        let mut wr = 1.0f64;
        let mut wi = 0.0f64;

        for m in 0..half {
            let twr = wr as f32;
            let twi = wi as f32;
            let mut i = m;
            while i < n {
                let j = i + half;
                let tr = twr * data[2 * j] - twi * data[2 * j + 1];
                let ti = twr * data[2 * j + 1] + twi * data[2 * j];
                data[2 * j] = data[2 * i] - tr;
                data[2 * j + 1] = data[2 * i + 1] - ti;
                data[2 * i] += tr;
                data[2 * i + 1] += ti;
                i += span;
            }
            let prev_wr = wr;
            wr += prev_wr * wpr - wi * wpi;
            wi += wi * wpr + prev_wr * wpi;
        }

        half = span;
    }
}

//! Analysis window functions
//!
//! Applied to each frame before the forward transform to reduce spectral
//! leakage. The default in this crate is `Rectangular` (no windowing),
//! which keeps the forward/inverse round trip an exact scale-by-N.

use std::f32::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// No windowing: w[n] = 1 for all n
    #[default]
    Rectangular,

    /// Hann window: w[n] = 0.5 - 0.5*cos(2*pi*n/(M-1))
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2*pi*n/(M-1))
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2*pi*n/(M-1)) + 0.08*cos(4*pi*n/(M-1))
    Blackman,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - type of window function
/// * `length` - number of samples (M)
///
/// # Returns
/// Vector of coefficients w[n] for n = 0..M-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f32> {
    let m = length as f32;
    let mut window = Vec::with_capacity(length);

    match window_type {
        WindowType::Rectangular => {
            window.resize(length, 1.0);
        }

        WindowType::Hann => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f32 / (m - 1.0);
                window.push(0.5 - 0.5 * angle.cos());
            }
        }

        WindowType::Hamming => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f32 / (m - 1.0);
                window.push(0.54 - 0.46 * angle.cos());
            }
        }

        WindowType::Blackman => {
            for n in 0..length {
                let angle1 = 2.0 * PI * n as f32 / (m - 1.0);
                let angle2 = 4.0 * PI * n as f32 / (m - 1.0);
                window.push(0.42 - 0.5 * angle1.cos() + 0.08 * angle2.cos());
            }
        }
    }

    window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_is_identity() {
        let window = generate_window(WindowType::Rectangular, 64);
        assert_eq!(window.len(), 64);
        assert!(window.iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_window_symmetry() {
        for wt in [WindowType::Hann, WindowType::Hamming, WindowType::Blackman] {
            let window = generate_window(wt, 65);
            for n in 0..65 {
                assert!(
                    (window[n] - window[64 - n]).abs() < 1e-6,
                    "{:?} not symmetric at {}",
                    wt,
                    n
                );
            }
            // Center of a symmetric odd-length window peaks at 1.0
            assert!((window[32] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hann_tapers_to_zero() {
        let window = generate_window(WindowType::Hann, 128);
        assert!(window[0].abs() < 1e-6);
        assert!(window[127].abs() < 1e-6);
    }

    #[test]
    fn test_hamming_endpoints() {
        let window = generate_window(WindowType::Hamming, 128);
        assert!(window[0] > 0.07 && window[0] < 0.09);
    }
}

//! Graph-wiring boundary helpers
//!
//! The transform objects themselves never verify that a forward instance
//! and an inverse instance agree on their half-spectrum size; pairing
//! mismatched instances silently produces wrong audio. Hosts that route
//! spectrum values between instances can validate the wiring here, at the
//! graph boundary, before any samples flow.

use num_complex::Complex;
use thiserror::Error;

use crate::spectrum::{ForwardFft, InverseFft};

/// Errors detectable when wiring spectral objects together
#[derive(Debug, Error)]
pub enum WiringError {
    #[error(
        "half-spectrum size mismatch: forward publishes {forward_bins} bins, \
         inverse consumes {inverse_bins}"
    )]
    HalfSpectrumMismatch {
        forward_bins: usize,
        inverse_bins: usize,
    },
}

/// Check that a forward and an inverse instance are frame-compatible
pub fn check_pair(forward: &ForwardFft, inverse: &InverseFft) -> Result<(), WiringError> {
    if forward.num_bins() != inverse.num_bins() {
        return Err(WiringError::HalfSpectrumMismatch {
            forward_bins: forward.num_bins(),
            inverse_bins: inverse.num_bins(),
        });
    }
    Ok(())
}

/// A validated forward/inverse pair with every emitted bin routed straight
/// into the inverse object, the way a host graph typically wires them
#[derive(Debug)]
pub struct SpectralPair {
    forward: ForwardFft,
    inverse: InverseFft,
}

impl SpectralPair {
    /// Wire a forward and an inverse instance together
    pub fn new(forward: ForwardFft, inverse: InverseFft) -> Result<Self, WiringError> {
        check_pair(&forward, &inverse)?;
        Ok(Self { forward, inverse })
    }

    /// Push one sample through analysis and resynthesis
    pub fn process(&mut self, sample: f32) -> f32 {
        let (re, im) = self.forward.process(sample);
        self.inverse.process_bin(Complex::new(re, im))
    }

    pub fn forward(&self) -> &ForwardFft {
        &self.forward
    }

    pub fn inverse(&self) -> &InverseFft {
        &self.inverse
    }

    /// Release the two instances
    pub fn into_parts(self) -> (ForwardFft, InverseFft) {
        (self.forward, self.inverse)
    }
}
